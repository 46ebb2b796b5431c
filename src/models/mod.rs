pub mod movie;
pub mod omdb;
pub mod state;

pub use movie::{MovieDetail, Poster, SearchResult, PLACEHOLDER_POSTER};
pub use omdb::{OmdbSearchItem, OmdbSearchResponse, OmdbTitle};
pub use state::RequestState;
