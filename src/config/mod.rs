//! Configuration loading and management for the Bracket Tax Engine.
//!
//! This module holds the bracket table registry, the built-in tables, and
//! the loader that reads tables from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use bracket_tax_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/brackets").unwrap();
//! println!("Default year: {}", config.registry().default_year());
//! ```

mod builtin;
mod loader;
mod registry;
mod types;

pub use builtin::{DEFAULT_YEAR, builtin_tables};
pub use loader::ConfigLoader;
pub use registry::BracketRegistry;
pub use types::{RegistryMetadata, TableFile};
