// ============================================================================
// OMDb wire types
// ============================================================================

use chrono::Utc;
use serde::Deserialize;

use super::movie::{available, MovieDetail, Poster, SearchResult};

/// `Response` is a string flag, `"True"` or `"False"`
pub(crate) fn is_true(flag: &str) -> bool {
    flag.eq_ignore_ascii_case("true")
}

/// Body of `GET /?s=<title>`
#[derive(Debug, Clone, Deserialize)]
pub struct OmdbSearchResponse {
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Search", default)]
    pub search: Option<Vec<OmdbSearchItem>>,
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
}

impl OmdbSearchResponse {
    pub fn is_success(&self) -> bool {
        is_true(&self.response)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OmdbSearchItem {
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year", default)]
    pub year: String,
    #[serde(rename = "Type", default)]
    pub media_type: String,
    #[serde(rename = "Poster", default)]
    pub poster: String,
}

impl From<OmdbSearchItem> for SearchResult {
    fn from(item: OmdbSearchItem) -> Self {
        SearchResult {
            id: item.imdb_id,
            title: item.title,
            year: item.year,
            poster: Poster::from(item.poster),
            media_type: item.media_type,
        }
    }
}

/// Body of `GET /?i=<id>&plot=full`
///
/// On failure only `Response` and `Error` are present, so every title field
/// is defaulted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OmdbTitle {
    pub response: String,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(rename = "imdbID", default)]
    pub imdb_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub rated: Option<String>,
    #[serde(default)]
    pub runtime: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub director: String,
    #[serde(default)]
    pub actors: String,
    #[serde(default)]
    pub plot: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub awards: Option<String>,
    #[serde(default)]
    pub poster: String,
    #[serde(rename = "Type", default)]
    pub media_type: String,
    #[serde(rename = "imdbRating", default)]
    pub imdb_rating: Option<String>,
    #[serde(default)]
    pub box_office: Option<String>,
}

impl OmdbTitle {
    pub fn is_success(&self) -> bool {
        is_true(&self.response)
    }
}

impl From<OmdbTitle> for MovieDetail {
    fn from(raw: OmdbTitle) -> Self {
        let rating = available(raw.imdb_rating).and_then(|r| r.trim().parse::<f32>().ok());

        MovieDetail {
            summary: SearchResult {
                id: raw.imdb_id,
                title: raw.title,
                year: raw.year,
                poster: Poster::from(raw.poster),
                media_type: raw.media_type,
            },
            rated: available(raw.rated),
            rating,
            runtime: raw.runtime,
            genre: raw.genre,
            plot: raw.plot,
            director: raw.director,
            actors: raw.actors,
            country: raw.country,
            language: raw.language,
            awards: available(raw.awards),
            box_office: available(raw.box_office),
            fetched_at: Utc::now(),
        }
    }
}
