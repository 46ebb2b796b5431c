use axum::{extract::State, http::StatusCode, Extension, Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::{
    middleware::request_id::RequestId,
    services::{DetailState, SearchState},
};

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    #[serde(flatten)]
    pub state: SearchState,
    /// Number of results, present only on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_count: Option<usize>,
}

impl From<SearchState> for SearchResponse {
    fn from(state: SearchState) -> Self {
        let result_count = state.payload().map(Vec::len);
        Self {
            state,
            result_count,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SelectRequest {
    /// Empty closes the overlay
    #[serde(default)]
    pub id: String,
}

#[derive(Debug, Serialize)]
pub struct DetailResponse {
    pub id: Option<String>,
    #[serde(flatten)]
    pub state: DetailState,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Run a title search and return the state it settled into
pub async fn search(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<SearchRequest>,
) -> Json<SearchResponse> {
    tracing::info!(request_id = %request_id, query = %request.query, "Processing search request");

    let settled = state.search.search(&request.query).await;
    Json(SearchResponse::from(settled))
}

/// Current search state
pub async fn get_search(State(state): State<AppState>) -> Json<SearchResponse> {
    Json(SearchResponse::from(state.search.state().await))
}

/// Clear results and errors
pub async fn reset_search(State(state): State<AppState>) -> StatusCode {
    state.search.reset().await;
    StatusCode::NO_CONTENT
}

/// Select a title; details load in the background
pub async fn select(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<SelectRequest>,
) -> (StatusCode, Json<DetailResponse>) {
    tracing::info!(request_id = %request_id, title_id = %request.id, "Processing selection");

    let status = match state.detail.select(Some(request.id.as_str())).await {
        Some(_) => StatusCode::ACCEPTED,
        None => StatusCode::OK,
    };

    (status, Json(detail_response(&state).await))
}

/// Close the detail overlay
pub async fn close_selection(State(state): State<AppState>) -> StatusCode {
    state.detail.close().await;
    StatusCode::NO_CONTENT
}

/// Current detail state
pub async fn get_detail(State(state): State<AppState>) -> Json<DetailResponse> {
    Json(detail_response(&state).await)
}

async fn detail_response(state: &AppState) -> DetailResponse {
    DetailResponse {
        id: state.detail.current_id().await,
        state: state.detail.state().await,
    }
}
