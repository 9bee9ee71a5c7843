//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading bracket tables
//! from YAML files into a [`BracketRegistry`].

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::BracketTable;

use super::builtin::DEFAULT_YEAR;
use super::registry::BracketRegistry;
use super::types::{RegistryMetadata, TableFile};

/// Loads and provides access to bracket table configuration.
///
/// # Directory Structure
///
/// ```text
/// config/brackets/
/// ├── registry.yaml      # Schedule name and default year
/// └── tables/
///     ├── 2024.yaml      # One file per year
///     └── 2025.yaml
/// ```
///
/// Each table file looks like:
///
/// ```yaml
/// year: "2025"
/// brackets:
///   - { lower: "0", upper: "10064", rate: "0.00" }
///   - { lower: "10064", rate: "0.11" }
/// ```
///
/// # Example
///
/// ```no_run
/// use bracket_tax_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/brackets").unwrap();
/// println!("Loaded schedule: {}", loader.metadata().name);
/// println!("Years: {:?}", loader.registry().years());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    metadata: RegistryMetadata,
    registry: BracketRegistry,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `registry.yaml` or the `tables` directory is missing
    /// - Any file contains invalid YAML
    /// - Any table violates the bracket partition rules
    /// - The default year has no table
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<RegistryMetadata>(&path.join("registry.yaml"))?;
        let tables = Self::load_tables(&path.join("tables"))?;
        let registry = BracketRegistry::new(tables, &metadata.default_year)?;

        Ok(Self { metadata, registry })
    }

    /// Creates a loader backed by the built-in tables.
    pub fn builtin() -> EngineResult<Self> {
        let metadata = RegistryMetadata {
            name: "Progressive Income Tax".to_string(),
            default_year: DEFAULT_YEAR.to_string(),
            source_url: None,
        };
        Ok(Self {
            metadata,
            registry: BracketRegistry::builtin()?,
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads every table file from the tables directory.
    fn load_tables(tables_dir: &Path) -> EngineResult<Vec<BracketTable>> {
        let tables_dir_str = tables_dir.display().to_string();

        let entries = fs::read_dir(tables_dir).map_err(|_| EngineError::ConfigNotFound {
            path: tables_dir_str.clone(),
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: tables_dir_str.clone(),
            })?;
            let path = entry.path();
            if path
                .extension()
                .is_some_and(|ext| ext == "yaml" || ext == "yml")
            {
                paths.push(path);
            }
        }
        paths.sort();

        if paths.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no table files found)", tables_dir_str),
            });
        }

        let mut tables = Vec::with_capacity(paths.len());
        for path in paths {
            let file = Self::load_yaml::<TableFile>(&path)?;
            debug!(
                path = %path.display(),
                year = %file.year,
                brackets = file.brackets.len(),
                "Loaded bracket table"
            );
            tables.push(BracketTable::new(file.year, file.brackets)?);
        }

        Ok(tables)
    }

    /// Returns the registry-level metadata.
    pub fn metadata(&self) -> &RegistryMetadata {
        &self.metadata
    }

    /// Returns the loaded registry.
    pub fn registry(&self) -> &BracketRegistry {
        &self.registry
    }

    /// Consumes the loader and returns the registry.
    pub fn into_registry(self) -> BracketRegistry {
        self.registry
    }
}
