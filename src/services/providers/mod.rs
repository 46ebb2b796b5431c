/// Movie metadata provider abstraction
///
/// Controllers only see this trait, so the OMDb client can be swapped for a
/// fake in tests or for another metadata source later.
use crate::{
    error::AppResult,
    models::{MovieDetail, SearchResult},
};

pub mod omdb;

pub use omdb::OmdbProvider;

/// Trait for movie metadata providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MovieProvider: Send + Sync {
    /// Search for titles by name
    ///
    /// `query` is already trimmed and non-empty. Results come back in the
    /// provider's order.
    async fn search(&self, query: &str) -> AppResult<Vec<SearchResult>>;

    /// Fetch the full record for one identifier
    async fn fetch_detail(&self, id: &str) -> AppResult<MovieDetail>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
