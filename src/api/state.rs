use std::sync::Arc;

use crate::services::{DetailController, MovieProvider, SearchController};

/// Shared application state
///
/// The two controllers share a provider but no state: the only link between
/// them is the identifier the browser sends when a result is selected.
#[derive(Clone)]
pub struct AppState {
    pub search: SearchController,
    pub detail: DetailController,
}

impl AppState {
    /// Creates fresh controllers backed by `provider`
    pub fn new(provider: Arc<dyn MovieProvider>) -> Self {
        Self {
            search: SearchController::new(provider.clone()),
            detail: DetailController::new(provider),
        }
    }
}
