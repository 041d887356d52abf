//! Application state for the HTTP server.

use std::sync::Arc;

use crate::db::repository::UsageRepository;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository holding the loaded extracts
    pub repository: Arc<dyn UsageRepository>,
}

impl AppState {
    /// Create a new application state with the given repository.
    pub fn new(repository: Arc<dyn UsageRepository>) -> Self {
        Self { repository }
    }
}
