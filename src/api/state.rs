//! Application state shared across HTTP handlers

use crate::config::Config;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Config,
}

impl AppState {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}
