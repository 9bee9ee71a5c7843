//! Bracket and bracket table models.
//!
//! This module contains the [`Bracket`] and [`BracketTable`] types. A bracket
//! table is validated once at construction so the calculation functions can
//! treat it as a well-formed partition of `[0, inf)`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A contiguous income range taxed at one marginal rate.
///
/// An `upper` of `None` marks the open-ended top bracket.
///
/// # Example
///
/// ```
/// use bracket_tax_engine::models::Bracket;
/// use rust_decimal_macros::dec;
///
/// let bracket = Bracket::bounded(dec!(10064), dec!(25659), dec!(0.11));
/// assert!(!bracket.is_unbounded());
///
/// let top = Bracket::unbounded(dec!(157806), dec!(0.45));
/// assert!(top.is_unbounded());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bracket {
    /// Lower bound of the range. Income must exceed this to be taxed here.
    pub lower: Decimal,
    /// Upper bound of the range, or `None` for the top bracket.
    #[serde(default)]
    pub upper: Option<Decimal>,
    /// Marginal rate as a fraction in `[0, 1]`.
    pub rate: Decimal,
}

impl Bracket {
    /// Creates a bracket with a finite upper bound.
    pub fn bounded(lower: Decimal, upper: Decimal, rate: Decimal) -> Self {
        Self {
            lower,
            upper: Some(upper),
            rate,
        }
    }

    /// Creates the open-ended top bracket.
    pub fn unbounded(lower: Decimal, rate: Decimal) -> Self {
        Self {
            lower,
            upper: None,
            rate,
        }
    }

    /// Returns true if this bracket has no upper bound.
    pub fn is_unbounded(&self) -> bool {
        self.upper.is_none()
    }
}

/// An ordered, validated set of brackets for one year.
///
/// Construction fails unless the brackets start at zero, chain without gaps
/// or overlaps, end with an unbounded bracket, and carry rates in `[0, 1]`.
///
/// # Example
///
/// ```
/// use bracket_tax_engine::models::{Bracket, BracketTable};
/// use rust_decimal_macros::dec;
///
/// let table = BracketTable::new(
///     "2025",
///     vec![
///         Bracket::bounded(dec!(0), dec!(10000), dec!(0)),
///         Bracket::unbounded(dec!(10000), dec!(0.2)),
///     ],
/// )
/// .unwrap();
///
/// assert_eq!(table.year(), "2025");
/// assert_eq!(table.brackets().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BracketTable {
    year: String,
    brackets: Vec<Bracket>,
}

impl BracketTable {
    /// Builds a table after checking the partition invariant.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidBracketTable`] describing the first
    /// violated constraint.
    pub fn new(year: impl Into<String>, brackets: Vec<Bracket>) -> EngineResult<Self> {
        let year = year.into();
        validate_partition(&year, &brackets)?;
        Ok(Self { year, brackets })
    }

    /// Returns the year identifier of this table.
    pub fn year(&self) -> &str {
        &self.year
    }

    /// Returns the brackets in ascending order.
    pub fn brackets(&self) -> &[Bracket] {
        &self.brackets
    }
}

fn validate_partition(year: &str, brackets: &[Bracket]) -> EngineResult<()> {
    let invalid = |message: String| EngineError::InvalidBracketTable {
        year: year.to_string(),
        message,
    };

    let Some(first) = brackets.first() else {
        return Err(invalid("table has no brackets".to_string()));
    };

    if !first.lower.is_zero() {
        return Err(invalid(format!(
            "first bracket must start at 0, found {}",
            first.lower
        )));
    }

    let last_index = brackets.len() - 1;
    for (index, bracket) in brackets.iter().enumerate() {
        if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE {
            return Err(invalid(format!(
                "bracket {} has rate {} outside [0, 1]",
                index, bracket.rate
            )));
        }

        match bracket.upper {
            Some(upper) => {
                if index == last_index {
                    return Err(invalid("last bracket must be unbounded".to_string()));
                }
                if upper <= bracket.lower {
                    return Err(invalid(format!(
                        "bracket {} upper bound {} is not above lower bound {}",
                        index, upper, bracket.lower
                    )));
                }
                let next_lower = brackets[index + 1].lower;
                if next_lower > upper {
                    return Err(invalid(format!(
                        "gap between brackets {} and {}: {} to {}",
                        index,
                        index + 1,
                        upper,
                        next_lower
                    )));
                }
                if next_lower < upper {
                    return Err(invalid(format!(
                        "brackets {} and {} overlap: {} is below {}",
                        index + 1,
                        index,
                        next_lower,
                        upper
                    )));
                }
            }
            None => {
                if index != last_index {
                    return Err(invalid(format!(
                        "bracket {} is unbounded but is not the last bracket",
                        index
                    )));
                }
            }
        }
    }

    Ok(())
}
