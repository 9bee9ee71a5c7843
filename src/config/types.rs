//! Configuration types for bracket tables.
//!
//! This module contains the structures deserialized from YAML configuration
//! files. They are converted into validated [`BracketTable`](crate::models::BracketTable)s
//! by the loader.

use serde::Deserialize;

use crate::models::Bracket;

/// Registry-level settings from `registry.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistryMetadata {
    /// Human-readable name of the tax schedule (e.g., "Progressive Income Tax").
    pub name: String,
    /// Year whose table is used when an unknown year is requested.
    pub default_year: String,
    /// Where the bracket values were taken from.
    #[serde(default)]
    pub source_url: Option<String>,
}

/// One year's brackets from `tables/<year>.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct TableFile {
    /// The year identifier (e.g., "2025").
    pub year: String,
    /// Brackets in ascending order; the last one omits `upper`.
    pub brackets: Vec<Bracket>,
}
