//! Application state for the HTTP server.

use std::sync::Arc;

use crate::db::repository::FullRepository;
use crate::services::pipeline::CalculatorSession;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository instance for database operations
    pub repository: Arc<dyn FullRepository>,
}

impl AppState {
    /// Create a new application state with the given repository.
    pub fn new(repository: Arc<dyn FullRepository>) -> Self {
        Self { repository }
    }

    /// Fresh calculator bound to the shared store.
    ///
    /// Each request gets its own session so concurrent clients never see
    /// each other's in-flight calculations.
    pub fn calculator_session(&self) -> CalculatorSession<dyn FullRepository> {
        CalculatorSession::new(Arc::clone(&self.repository))
    }
}
