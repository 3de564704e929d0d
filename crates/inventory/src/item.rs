use serde::{Deserialize, Serialize};

/// Name of the aged cheese whose quality improves with age.
pub const AGED_BRIE: &str = "Aged Brie";

/// Name of the concert passes whose quality climbs until the concert, then drops to zero.
pub const BACKSTAGE_PASSES: &str = "Backstage passes to a TAFKAL80ETC concert";

/// Name of the legendary item that never changes.
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";

/// A single inventory record.
///
/// The name selects the update rules and is fixed at construction. `sell_in`
/// and `quality` are mutated in place once per day. Construction does not
/// validate either value: a legendary item is built at quality 80, and an
/// out-of-range value on any other item is only pulled back into range by the
/// next update.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    name: String,
    /// Days left to sell the item. Negative once the sell-by date has passed.
    pub sell_in: i32,
    /// How valuable the item is.
    pub quality: i32,
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}
