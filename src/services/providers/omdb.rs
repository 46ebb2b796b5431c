/// OMDb API provider
///
/// Both operations hit the same endpoint and differ only in query
/// parameters:
/// 1. Title Search: `?apikey=..&s=<title>` → `Search` array
/// 2. Details: `?apikey=..&i=<imdb id>&plot=full` → single title object
///
/// OMDb reports logical failures (no matches, bad ID) with HTTP 200 and
/// `"Response": "False"`, so the body is inspected even on success.
use std::time::Duration;

use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;

use crate::{
    config::ApiConfig,
    error::{AppError, AppResult},
    models::{MovieDetail, OmdbSearchResponse, OmdbTitle, SearchResult},
    services::providers::MovieProvider,
};

const SEARCH_NOT_FOUND: &str = "Movies not found";
const DETAIL_NOT_FOUND: &str = "Movie details not found";

#[derive(Clone)]
pub struct OmdbProvider {
    http_client: HttpClient,
    api: ApiConfig,
}

impl OmdbProvider {
    pub fn new(api: ApiConfig) -> Self {
        Self {
            http_client: HttpClient::new(),
            api,
        }
    }

    /// Creates a provider whose requests give up after `timeout`
    pub fn with_timeout(api: ApiConfig, timeout: Duration) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;
        Ok(Self { http_client, api })
    }

    /// Issues one GET against the configured endpoint and decodes the body
    async fn get<T: DeserializeOwned>(&self, params: &[(&str, &str)]) -> AppResult<T> {
        let response = self
            .http_client
            .get(&self.api.base_url)
            .query(&[("apikey", self.api.credential.as_str())])
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = %status, provider = "omdb", "OMDb request failed");
            return Err(AppError::HttpStatus(status.as_u16()));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                error = %e,
                response = %body,
                "Failed to deserialize OMDb response"
            );
            AppError::Parse(e)
        })
    }
}

#[async_trait::async_trait]
impl MovieProvider for OmdbProvider {
    async fn search(&self, query: &str) -> AppResult<Vec<SearchResult>> {
        let response: OmdbSearchResponse = self.get(&[("s", query)]).await?;

        if !response.is_success() {
            let message = response
                .error
                .filter(|e| !e.trim().is_empty())
                .unwrap_or_else(|| SEARCH_NOT_FOUND.to_string());
            tracing::info!(
                query = %query,
                error = %message,
                provider = "omdb",
                "No titles found"
            );
            return Err(AppError::NotFound(message));
        }

        let titles: Vec<SearchResult> = response
            .search
            .unwrap_or_default()
            .into_iter()
            .map(SearchResult::from)
            .collect();

        tracing::info!(
            query = %query,
            results = titles.len(),
            provider = "omdb",
            "Title search completed"
        );

        Ok(titles)
    }

    async fn fetch_detail(&self, id: &str) -> AppResult<MovieDetail> {
        let raw: OmdbTitle = self.get(&[("i", id), ("plot", "full")]).await?;

        if !raw.is_success() {
            let message = raw
                .error
                .filter(|e| !e.trim().is_empty())
                .unwrap_or_else(|| DETAIL_NOT_FOUND.to_string());
            tracing::info!(
                title_id = %id,
                error = %message,
                provider = "omdb",
                "Title lookup failed"
            );
            return Err(AppError::NotFound(message));
        }

        let detail = MovieDetail::from(raw);

        tracing::info!(
            title_id = %id,
            title = %detail.title(),
            provider = "omdb",
            "Title details fetched"
        );

        Ok(detail)
    }

    fn name(&self) -> &'static str {
        "omdb"
    }
}
