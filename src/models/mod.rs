//! Core data models for the Bracket Tax Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod bracket;
mod breakdown;
mod report;
mod tax_input;
mod tax_summary;

pub use bracket::{Bracket, BracketTable};
pub use breakdown::BracketEntry;
pub use report::{AuditStep, AuditTrace, AuditWarning, TaxReport};
pub use tax_input::{CreditItems, DeductionItems, TaxInput};
pub use tax_summary::{TaxSummary, YearComparisonRow};
