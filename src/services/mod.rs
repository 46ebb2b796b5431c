pub mod cancel;
pub mod detail;
pub mod providers;
pub mod search;

#[cfg(test)]
pub(crate) mod testing;

pub use cancel::CancelToken;
pub use detail::{DetailController, DetailState};
pub use providers::{MovieProvider, OmdbProvider};
pub use search::{SearchController, SearchState, EMPTY_QUERY_MESSAGE};
