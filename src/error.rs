//! Error types for the Bracket Tax Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The calculation functions themselves are total; errors only arise while
//! building bracket tables, loading configuration, or validating inputs.

use thiserror::Error;

/// The main error type for the Bracket Tax Engine.
///
/// # Example
///
/// ```
/// use bracket_tax_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/registry.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/registry.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A bracket table does not form a gap-free partition of `[0, inf)`.
    #[error("Invalid bracket table for year '{year}': {message}")]
    InvalidBracketTable {
        /// The year the table was registered under.
        year: String,
        /// A description of the violated constraint.
        message: String,
    },

    /// The registry's default year has no table.
    #[error("Default year '{year}' has no registered bracket table")]
    DefaultYearMissing {
        /// The configured default year.
        year: String,
    },

    /// A calculation input was rejected before reaching the engine.
    #[error("Invalid input field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/registry.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/registry.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/tables/2025.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/tables/2025.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_bracket_table_displays_year_and_message() {
        let error = EngineError::InvalidBracketTable {
            year: "2025".to_string(),
            message: "gap between brackets 1 and 2".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid bracket table for year '2025': gap between brackets 1 and 2"
        );
    }

    #[test]
    fn test_default_year_missing_displays_year() {
        let error = EngineError::DefaultYearMissing {
            year: "2030".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Default year '2030' has no registered bracket table"
        );
    }

    #[test]
    fn test_invalid_input_displays_field_and_message() {
        let error = EngineError::InvalidInput {
            field: "deductions".to_string(),
            message: "must not be negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid input field 'deductions': must not be negative"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_default_missing() -> EngineResult<()> {
            Err(EngineError::DefaultYearMissing {
                year: "2030".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_default_missing()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
