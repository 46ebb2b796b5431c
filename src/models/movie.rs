use chrono::{DateTime, Utc};
use serde::Serialize;

/// Image shown whenever a title has no poster
pub const PLACEHOLDER_POSTER: &str = "https://via.placeholder.com/300x450?text=No+Image";

/// OMDb's "field not available" marker
pub(crate) const NOT_AVAILABLE: &str = "N/A";

/// Poster reference for a title
///
/// OMDb reports a missing poster as the literal `"N/A"`. That sentinel is
/// folded into [`Poster::Unavailable`] on the way in and serialized as the
/// placeholder on the way out, so it never reaches an image tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum Poster {
    Available(String),
    Unavailable,
}

impl Poster {
    /// URL to render
    pub fn src(&self) -> &str {
        match self {
            Poster::Available(url) => url,
            Poster::Unavailable => PLACEHOLDER_POSTER,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Poster::Available(_))
    }
}

impl From<String> for Poster {
    fn from(value: String) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed == NOT_AVAILABLE {
            Poster::Unavailable
        } else {
            Poster::Available(value)
        }
    }
}

impl From<Poster> for String {
    fn from(poster: Poster) -> Self {
        poster.src().to_string()
    }
}

/// One entry of a title search, in the order the API returned it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    /// External identifier (IMDb ID), unique per item
    pub id: String,
    pub title: String,
    pub year: String,
    pub poster: Poster,
    /// "movie", "series", "episode", ...
    pub media_type: String,
}

/// Full record for a single title
///
/// A superset of [`SearchResult`]; the summary fields are flattened when
/// serialized so the overlay sees a single object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieDetail {
    #[serde(flatten)]
    pub summary: SearchResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rated: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    pub runtime: String,
    pub genre: String,
    pub plot: String,
    pub director: String,
    pub actors: String,
    pub country: String,
    pub language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub awards: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub box_office: Option<String>,
    pub fetched_at: DateTime<Utc>,
}

impl MovieDetail {
    pub fn id(&self) -> &str {
        &self.summary.id
    }

    pub fn title(&self) -> &str {
        &self.summary.title
    }
}

/// Maps OMDb's `"N/A"` (or a blank value) to `None`
pub(crate) fn available(value: Option<String>) -> Option<String> {
    value.filter(|v| {
        let v = v.trim();
        !v.is_empty() && v != NOT_AVAILABLE
    })
}
