use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    error::AppError,
    models::{RequestState, SearchResult},
    services::providers::MovieProvider,
};

/// Shown when the user submits a blank title
pub const EMPTY_QUERY_MESSAGE: &str = "Enter a movie title";

pub type SearchState = RequestState<Vec<SearchResult>>;

/// Owns title search submission and the resulting list state
///
/// Overlapping searches are not coordinated: each call writes its own
/// outcome when it settles, so the last one to resolve wins even if it was
/// submitted first.
#[derive(Clone)]
pub struct SearchController {
    provider: Arc<dyn MovieProvider>,
    state: Arc<RwLock<SearchState>>,
}

impl SearchController {
    pub fn new(provider: Arc<dyn MovieProvider>) -> Self {
        Self {
            provider,
            state: Arc::new(RwLock::new(RequestState::Idle)),
        }
    }

    /// Runs one search and returns the state it settled into
    pub async fn search(&self, query: &str) -> SearchState {
        let query = query.trim();

        if query.is_empty() {
            let message = AppError::InvalidInput(EMPTY_QUERY_MESSAGE.to_string()).user_message();
            return self.set(RequestState::Failure(message)).await;
        }

        self.set(RequestState::Loading).await;

        let next = match self.provider.search(query).await {
            Ok(results) => RequestState::Success(results),
            Err(e) => {
                tracing::warn!(
                    query = %query,
                    error = %e,
                    provider = self.provider.name(),
                    "Search failed"
                );
                RequestState::Failure(e.user_message())
            }
        };

        self.set(next).await
    }

    /// Back to `Idle`, dropping results and errors
    pub async fn reset(&self) {
        self.set(RequestState::Idle).await;
    }

    pub async fn state(&self) -> SearchState {
        self.state.read().await.clone()
    }

    async fn set(&self, next: SearchState) -> SearchState {
        let mut state = self.state.write().await;
        *state = next;
        state.clone()
    }
}
