//! Calculation logic for the Bracket Tax Engine.
//!
//! This module contains the shared per-bracket contribution step, the total
//! tax calculator, the per-bracket breakdown generator, and the summary,
//! comparison, and report functions built on top of them.

mod breakdown;
mod comparison;
mod contribution;
mod report;
mod rounding;
mod summary;
mod tax;

pub use breakdown::{compute_breakdown, range_label};
pub use comparison::{compare_scenarios, compare_years};
pub use contribution::{BracketContribution, bracket_contribution, contributions};
pub use report::{ENGINE_VERSION, generate_report};
pub use rounding::{percentage_of, round_half_up};
pub use summary::{summarize, taxable_income};
pub use tax::compute_tax;
