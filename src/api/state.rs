//! Application state for the Bracket Tax Engine API.

use std::sync::Arc;

use crate::config::{BracketRegistry, ConfigLoader};

/// State shared by every handler: the bracket configuration loaded at
/// startup, read-only for the life of the server.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Wraps a loaded configuration for sharing across handlers.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// The loaded configuration, including registry metadata.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the bracket registry.
    pub fn registry(&self) -> &BracketRegistry {
        self.config.registry()
    }
}
