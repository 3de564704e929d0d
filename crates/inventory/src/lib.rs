//! Inventory domain module.
//!
//! This crate contains the daily update rules for the Gilded Rose inventory,
//! implemented purely as deterministic domain logic (no IO, no storage).
//!
//! Each item name resolves to an [`UpdateStrategy`] through a
//! [`StrategyRegistry`]; unknown names fall back to the normal-item rules.

pub mod gilded_rose;
pub mod item;
pub mod quality;
pub mod registry;
pub mod strategy;

pub use gilded_rose::GildedRose;
pub use item::{AGED_BRIE, BACKSTAGE_PASSES, Item, SULFURAS};
pub use quality::{MAX_QUALITY, MIN_QUALITY};
pub use registry::StrategyRegistry;
pub use strategy::{AgedBrie, BackstagePass, Legendary, NormalItem, UpdateStrategy};
