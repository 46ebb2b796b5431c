/// Fallback when a transport failure carries no message of its own
pub const GENERIC_LOAD_ERROR: &str = "Failed to load data";

/// Application-level errors
///
/// Display strings are what the user sees: a controller puts
/// [`AppError::user_message`] straight onto its failure state.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Rejected before any request was made (e.g. an empty title)
    #[error("{0}")]
    InvalidInput(String),

    /// The movie API answered with a non-success status
    #[error("HTTP error: {0}")]
    HttpStatus(u16),

    /// Transport failure; the request URL is stripped on conversion
    #[error("{0}")]
    HttpClient(reqwest::Error),

    #[error("Failed to parse movie API response: {0}")]
    Parse(#[from] serde_json::Error),

    /// The movie API answered `Response: "False"`
    #[error("{0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Human-readable message placed on controller state
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            GENERIC_LOAD_ERROR.to_string()
        } else {
            message
        }
    }
}

/// The request URL carries the API key, so it never reaches a message or log
impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::HttpClient(e.without_url())
    }
}

pub type AppResult<T> = Result<T, AppError>;
