//! Prints the classic shop inventory day by day.
//!
//! Usage: `gildedrose-fixture [DAYS]`. Without an argument the day count comes
//! from `GILDED_ROSE_DAYS`, else defaults to 2.

use anyhow::Context;

use gildedrose_core::{DomainError, DomainResult};
use gildedrose_inventory::{AGED_BRIE, BACKSTAGE_PASSES, GildedRose, Item, SULFURAS};

const DAYS_ENV: &str = "GILDED_ROSE_DAYS";
const DEFAULT_DAYS: u32 = 2;

fn main() -> anyhow::Result<()> {
    gildedrose_observability::init();

    let days = match std::env::args().nth(1) {
        Some(raw) => parse_days(&raw).context("invalid DAYS argument")?,
        None => match std::env::var(DAYS_ENV) {
            Ok(raw) => parse_days(&raw).with_context(|| format!("invalid {DAYS_ENV}"))?,
            Err(_) => DEFAULT_DAYS,
        },
    };
    tracing::info!(days, "running inventory fixture");

    let mut shop = GildedRose::new(classic_items());
    for day in 0..days {
        println!("-------- day {day} --------");
        println!("name, sellIn, quality");
        for item in shop.items() {
            println!("{item}");
        }
        println!();
        shop.tick();
    }

    Ok(())
}

fn parse_days(raw: &str) -> DomainResult<u32> {
    raw.trim()
        .parse()
        .map_err(|_| DomainError::validation(format!("expected a day count, got {raw:?}")))
}

fn classic_items() -> Vec<Item> {
    vec![
        Item::new("+5 Dexterity Vest", 10, 20),
        Item::new(AGED_BRIE, 2, 0),
        Item::new("Elixir of the Mongoose", 5, 7),
        Item::new(SULFURAS, 0, 80),
        Item::new(SULFURAS, -1, 80),
        Item::new(BACKSTAGE_PASSES, 15, 20),
        Item::new(BACKSTAGE_PASSES, 10, 49),
        Item::new(BACKSTAGE_PASSES, 5, 49),
        Item::new("Conjured Mana Cake", 3, 6),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_day_counts() {
        assert_eq!(parse_days("30"), Ok(30));
        assert_eq!(parse_days(" 7\n"), Ok(7));
    }

    #[test]
    fn rejects_non_numeric_days() {
        let err = parse_days("soon").unwrap_err();
        assert_eq!(
            err,
            DomainError::validation("expected a day count, got \"soon\"")
        );
        assert!(parse_days("-1").is_err());
    }

    #[test]
    fn classic_items_start_within_bounds() {
        let shop = GildedRose::new(classic_items());
        assert!(shop.check_bounds().is_ok());
    }
}
