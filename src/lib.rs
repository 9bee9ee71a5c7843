//! Bracket Tax Engine
//!
//! This crate computes progressive income tax from year-specific marginal
//! brackets, applies deductions and credits, and reports the tax, effective
//! rate, and per-bracket breakdown.
//!
//! # Example
//!
//! ```
//! use bracket_tax_engine::config::BracketRegistry;
//! use rust_decimal_macros::dec;
//!
//! let registry = BracketRegistry::builtin().unwrap();
//!
//! let tax = registry.compute_tax(dec!(50000), "2025");
//! let breakdown = registry.compute_breakdown(dec!(50000), "2025");
//!
//! assert_eq!(tax, dec!(9017.75));
//! assert_eq!(breakdown.iter().map(|e| e.tax_amount).sum::<rust_decimal::Decimal>(), tax);
//! ```

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
