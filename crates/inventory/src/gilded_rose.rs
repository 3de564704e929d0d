use gildedrose_core::{DomainError, DomainResult};

use crate::item::Item;
use crate::quality::{MAX_QUALITY, MIN_QUALITY};
use crate::registry::StrategyRegistry;
use crate::strategy::UpdateStrategy;

/// The shop's inventory: an ordered list of items plus the rules that age them.
///
/// Ticks are not re-entrant. Callers sharing an inventory across threads wrap
/// it in a lock so that one tick finishes before the next begins.
#[derive(Debug, Clone)]
pub struct GildedRose {
    items: Vec<Item>,
    registry: StrategyRegistry,
}

impl GildedRose {
    /// Inventory using the built-in categories.
    pub fn new(items: Vec<Item>) -> Self {
        Self::with_registry(items, StrategyRegistry::new())
    }

    pub fn with_registry(items: Vec<Item>, registry: StrategyRegistry) -> Self {
        Self { items, registry }
    }

    /// Bind a new category (or rebind an existing one) for subsequent ticks.
    pub fn register_strategy<S>(&mut self, name: impl Into<String>, strategy: S)
    where
        S: UpdateStrategy + 'static,
    {
        self.registry.register(name, strategy);
    }

    /// Advance every item by one day, in order.
    ///
    /// Each item gets its quality update and then its sell-in update before the
    /// next item is touched. An empty inventory is a no-op.
    pub fn tick(&mut self) {
        tracing::debug!(items = self.items.len(), "advancing inventory by one day");

        for item in &mut self.items {
            let strategy = self.registry.resolve(item.name());
            strategy.update_quality(item);
            strategy.update_sell_in(item);

            tracing::trace!(
                item = %item.name(),
                strategy = ?strategy,
                sell_in = item.sell_in,
                quality = item.quality,
                "item updated"
            );
        }
    }

    /// Advance the inventory by `days` ticks.
    pub fn tick_days(&mut self, days: u32) {
        for _ in 0..days {
            self.tick();
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    pub fn registry(&self) -> &StrategyRegistry {
        &self.registry
    }

    /// Report the first bounded item whose quality sits outside the allowed range.
    ///
    /// Construction never clamps, so an item built out of range stays there
    /// until its first update. This check only reports; it never corrects.
    pub fn check_bounds(&self) -> DomainResult<()> {
        let out_of_range = self.items.iter().find(|item| {
            self.registry.resolve(item.name()).is_bounded()
                && !(MIN_QUALITY..=MAX_QUALITY).contains(&item.quality)
        });

        match out_of_range {
            Some(item) => Err(DomainError::invariant(format!(
                "quality {} of \"{}\" is outside [{MIN_QUALITY}, {MAX_QUALITY}]",
                item.quality,
                item.name()
            ))),
            None => Ok(()),
        }
    }
}
