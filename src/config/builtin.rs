//! Built-in bracket tables.
//!
//! These are the schedules shipped with the engine. The YAML files under
//! `config/brackets/` carry the same values.

use rust_decimal_macros::dec;

use crate::error::EngineResult;
use crate::models::{Bracket, BracketTable};

/// The most current year, used as the fallback table.
pub const DEFAULT_YEAR: &str = "2025";

/// Returns the built-in tables for 2022 through 2025, oldest first.
pub fn builtin_tables() -> EngineResult<Vec<BracketTable>> {
    Ok(vec![
        BracketTable::new(
            "2022",
            vec![
                Bracket::bounded(dec!(0), dec!(8900), dec!(0.00)),
                Bracket::bounded(dec!(8900), dec!(23850), dec!(0.09)),
                Bracket::bounded(dec!(23850), dec!(68500), dec!(0.26)),
                Bracket::bounded(dec!(68500), dec!(148000), dec!(0.38)),
                Bracket::unbounded(dec!(148000), dec!(0.42)),
            ],
        )?,
        BracketTable::new(
            "2023",
            vec![
                Bracket::bounded(dec!(0), dec!(9325), dec!(0.00)),
                Bracket::bounded(dec!(9325), dec!(24500), dec!(0.10)),
                Bracket::bounded(dec!(24500), dec!(70500), dec!(0.27)),
                Bracket::bounded(dec!(70500), dec!(152000), dec!(0.39)),
                Bracket::unbounded(dec!(152000), dec!(0.43)),
            ],
        )?,
        BracketTable::new(
            "2024",
            vec![
                Bracket::bounded(dec!(0), dec!(9875), dec!(0.00)),
                Bracket::bounded(dec!(9875), dec!(25175), dec!(0.10)),
                Bracket::bounded(dec!(25175), dec!(72000), dec!(0.28)),
                Bracket::bounded(dec!(72000), dec!(155000), dec!(0.40)),
                Bracket::unbounded(dec!(155000), dec!(0.44)),
            ],
        )?,
        BracketTable::new(
            DEFAULT_YEAR,
            vec![
                Bracket::bounded(dec!(0), dec!(10064), dec!(0.00)),
                Bracket::bounded(dec!(10064), dec!(25659), dec!(0.11)),
                Bracket::bounded(dec!(25659), dec!(73369), dec!(0.30)),
                Bracket::bounded(dec!(73369), dec!(157806), dec!(0.41)),
                Bracket::unbounded(dec!(157806), dec!(0.45)),
            ],
        )?,
    ])
}
