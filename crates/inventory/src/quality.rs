//! Shared arithmetic for the bounded categories.

use crate::item::Item;

/// Lowest quality a bounded item can reach through an update.
pub const MIN_QUALITY: i32 = 0;

/// Highest quality a bounded item can reach through an update.
pub const MAX_QUALITY: i32 = 50;

/// Bound `quality` to `[MIN_QUALITY, MAX_QUALITY]`.
pub fn clamp(quality: i32) -> i32 {
    quality.clamp(MIN_QUALITY, MAX_QUALITY)
}

/// Shift the item's quality by `delta`, then clamp.
pub fn adjust_quality(item: &mut Item, delta: i32) {
    item.quality = clamp(item.quality.saturating_add(delta));
}

/// Whether the sell-by date has passed.
///
/// Evaluated after the day's `sell_in` decrement, so an item sold on its last
/// day (`sell_in == 0` before the update) counts as expired for that update.
pub fn is_expired(item: &Item) -> bool {
    item.sell_in < 0
}

pub fn decrease_sell_in(item: &mut Item) {
    item.sell_in = item.sell_in.saturating_sub(1);
}
