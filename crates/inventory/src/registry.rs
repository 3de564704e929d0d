//! Name-keyed lookup of update strategies.

use std::collections::HashMap;
use std::sync::Arc;

use crate::item::{AGED_BRIE, BACKSTAGE_PASSES, SULFURAS};
use crate::strategy::{AgedBrie, BackstagePass, Legendary, NormalItem, UpdateStrategy};

/// Maps item names to their update strategy.
///
/// Names are matched exactly. Anything not registered resolves to
/// [`NormalItem`]; an unknown name is not an error.
///
/// New categories are added with [`StrategyRegistry::register`] without
/// touching the existing strategies.
#[derive(Debug, Clone)]
pub struct StrategyRegistry {
    strategies: HashMap<String, Arc<dyn UpdateStrategy>>,
    fallback: Arc<dyn UpdateStrategy>,
}

impl StrategyRegistry {
    /// Registry with the built-in categories bound.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(AGED_BRIE, AgedBrie);
        registry.register(BACKSTAGE_PASSES, BackstagePass);
        registry.register(SULFURAS, Legendary);
        registry
    }

    /// Registry with no bindings; every name resolves to [`NormalItem`].
    pub fn empty() -> Self {
        Self {
            strategies: HashMap::new(),
            fallback: Arc::new(NormalItem),
        }
    }

    /// Bind `name` to `strategy`, returning the binding it replaced (if any).
    pub fn register<S>(
        &mut self,
        name: impl Into<String>,
        strategy: S,
    ) -> Option<Arc<dyn UpdateStrategy>>
    where
        S: UpdateStrategy + 'static,
    {
        let name = name.into();
        let strategy: Arc<dyn UpdateStrategy> = Arc::new(strategy);
        tracing::debug!(item = %name, strategy = ?strategy, "registering update strategy");
        self.strategies.insert(name, strategy)
    }

    /// Strategy for `name`, falling back to [`NormalItem`].
    pub fn resolve(&self, name: &str) -> &dyn UpdateStrategy {
        match self.strategies.get(name) {
            Some(strategy) => strategy.as_ref(),
            None => self.fallback.as_ref(),
        }
    }

    /// Whether `name` has an explicit binding.
    pub fn contains(&self, name: &str) -> bool {
        self.strategies.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::new()
    }
}
