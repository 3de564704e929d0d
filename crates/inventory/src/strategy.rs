//! Per-category update rules.

use crate::item::Item;
use crate::quality::{MIN_QUALITY, adjust_quality, decrease_sell_in, is_expired};

/// Daily update rules for one item category.
///
/// An update always runs `update_quality` first and `update_sell_in` second.
/// Any adjustment that depends on expiry belongs in `update_sell_in`, where it
/// sees the already decremented `sell_in` and builds on the quality produced by
/// `update_quality`.
pub trait UpdateStrategy: core::fmt::Debug + Send + Sync {
    /// Apply the day's quality change, before `sell_in` moves.
    fn update_quality(&self, item: &mut Item);

    /// Move `sell_in` and apply any post-expiry adjustment.
    fn update_sell_in(&self, item: &mut Item);

    /// Whether items under this strategy are held to `[MIN_QUALITY, MAX_QUALITY]`.
    fn is_bounded(&self) -> bool {
        true
    }
}

/// Default rules: quality drops by 1 per day, by 2 once expired.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct NormalItem;

impl UpdateStrategy for NormalItem {
    fn update_quality(&self, item: &mut Item) {
        adjust_quality(item, -1);
    }

    fn update_sell_in(&self, item: &mut Item) {
        decrease_sell_in(item);
        if is_expired(item) {
            adjust_quality(item, -1);
        }
    }
}

/// Aged cheese: quality rises by 1 per day, by 2 once expired.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct AgedBrie;

impl UpdateStrategy for AgedBrie {
    fn update_quality(&self, item: &mut Item) {
        adjust_quality(item, 1);
    }

    fn update_sell_in(&self, item: &mut Item) {
        decrease_sell_in(item);
        if is_expired(item) {
            adjust_quality(item, 1);
        }
    }
}

/// Concert passes: quality rises faster as the concert nears and is worthless afterwards.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct BackstagePass;

impl BackstagePass {
    /// Below this many days the pass gains 3 per day.
    pub const CRITICAL_DAYS: i32 = 6;
    /// Below this many days the pass gains 2 per day.
    pub const URGENT_DAYS: i32 = 11;

    /// Daily gain for a pass with `days_until_concert` left (not yet decremented).
    pub fn quality_increase(days_until_concert: i32) -> i32 {
        if days_until_concert < Self::CRITICAL_DAYS {
            3
        } else if days_until_concert < Self::URGENT_DAYS {
            2
        } else {
            1
        }
    }
}

impl UpdateStrategy for BackstagePass {
    fn update_quality(&self, item: &mut Item) {
        adjust_quality(item, Self::quality_increase(item.sell_in));
    }

    fn update_sell_in(&self, item: &mut Item) {
        decrease_sell_in(item);
        if is_expired(item) {
            item.quality = MIN_QUALITY;
        }
    }
}

/// Legendary items: never sold, never degrade, exempt from the quality bound.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Legendary;

impl UpdateStrategy for Legendary {
    fn update_quality(&self, _item: &mut Item) {}

    fn update_sell_in(&self, _item: &mut Item) {}

    fn is_bounded(&self) -> bool {
        false
    }
}
