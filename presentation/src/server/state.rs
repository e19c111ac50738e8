//! Shared application state for the front controller.

use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use triage_application::CategorySuggester;

/// Shared state accessible by all handlers via axum's State extractor.
pub struct AppState {
    pub suggester: Arc<dyn CategorySuggester>,
    /// Server-wide shutdown token; each request works on a child of it
    pub shutdown: CancellationToken,
}

impl AppState {
    pub fn new(suggester: Arc<dyn CategorySuggester>, shutdown: CancellationToken) -> Self {
        Self {
            suggester,
            shutdown,
        }
    }
}

pub type SharedState = Arc<AppState>;
