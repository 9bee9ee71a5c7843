//! The bracket table registry.
//!
//! This module provides [`BracketRegistry`], which maps year identifiers to
//! validated bracket tables and resolves unknown years to a default table.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculation::{compute_breakdown, compute_tax};
use crate::error::{EngineError, EngineResult};
use crate::models::{BracketEntry, BracketTable};

use super::builtin::{DEFAULT_YEAR, builtin_tables};

/// Read-only mapping from year to bracket table.
///
/// The registry is built once and never mutated, so it can be shared freely
/// across threads.
///
/// # Example
///
/// ```
/// use bracket_tax_engine::config::BracketRegistry;
/// use rust_decimal_macros::dec;
///
/// let registry = BracketRegistry::builtin().unwrap();
///
/// assert_eq!(registry.resolve("2023").year(), "2023");
/// // Unknown years fall back to the default table.
/// assert_eq!(registry.resolve("1999").year(), "2025");
///
/// assert_eq!(registry.compute_tax(dec!(50000), "2025"), dec!(9017.75));
/// ```
#[derive(Debug, Clone)]
pub struct BracketRegistry {
    tables: BTreeMap<String, BracketTable>,
    default_table: BracketTable,
}

impl BracketRegistry {
    /// Creates a registry from already validated tables.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidBracketTable`] if two tables share a year
    /// - [`EngineError::DefaultYearMissing`] if `default_year` has no table
    pub fn new(tables: Vec<BracketTable>, default_year: &str) -> EngineResult<Self> {
        let mut by_year = BTreeMap::new();
        for table in tables {
            let year = table.year().to_string();
            if by_year.insert(year.clone(), table).is_some() {
                return Err(EngineError::InvalidBracketTable {
                    year,
                    message: "year is registered more than once".to_string(),
                });
            }
        }

        let default_table = by_year
            .get(default_year)
            .cloned()
            .ok_or_else(|| EngineError::DefaultYearMissing {
                year: default_year.to_string(),
            })?;

        debug!(
            years = by_year.len(),
            default_year = %default_year,
            "Bracket registry initialised"
        );

        Ok(Self {
            tables: by_year,
            default_table,
        })
    }

    /// Creates a registry holding the built-in 2022 to 2025 tables.
    pub fn builtin() -> EngineResult<Self> {
        Self::new(builtin_tables()?, DEFAULT_YEAR)
    }

    /// Resolves a year to its table, falling back to the default table.
    pub fn resolve(&self, year: &str) -> &BracketTable {
        match self.tables.get(year) {
            Some(table) => table,
            None => {
                debug!(
                    requested_year = %year,
                    default_year = %self.default_table.year(),
                    "Unknown tax year, using default table"
                );
                &self.default_table
            }
        }
    }

    /// Returns the table for `year` without falling back.
    pub fn get(&self, year: &str) -> Option<&BracketTable> {
        self.tables.get(year)
    }

    /// Returns true if `year` has its own table.
    pub fn contains(&self, year: &str) -> bool {
        self.tables.contains_key(year)
    }

    /// Returns the year used for fallback.
    pub fn default_year(&self) -> &str {
        self.default_table.year()
    }

    /// Returns the fallback table.
    pub fn default_table(&self) -> &BracketTable {
        &self.default_table
    }

    /// Returns every registered year in ascending order.
    pub fn years(&self) -> Vec<&str> {
        self.tables.keys().map(String::as_str).collect()
    }

    /// Computes tax for `taxable_income` under the table resolved for `year`.
    pub fn compute_tax(&self, taxable_income: Decimal, year: &str) -> Decimal {
        compute_tax(taxable_income, self.resolve(year))
    }

    /// Computes the breakdown for `taxable_income` under the table resolved for `year`.
    pub fn compute_breakdown(&self, taxable_income: Decimal, year: &str) -> Vec<BracketEntry> {
        compute_breakdown(taxable_income, self.resolve(year))
    }
}
