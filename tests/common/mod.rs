//! Shared fixtures: a canned movie provider and a mock OMDb server.

#![allow(dead_code)]

use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
};

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use movie_search::{
    error::{AppError, AppResult},
    models::{MovieDetail, Poster, SearchResult},
    services::MovieProvider,
};

// ============================================================================
// Canned provider
// ============================================================================

/// Provider answering from fixed tables; unknown keys are "not found"
#[derive(Default)]
pub struct CannedProvider {
    pub searches: HashMap<String, Vec<SearchResult>>,
    pub details: HashMap<String, MovieDetail>,
    search_calls: AtomicUsize,
    detail_calls: AtomicUsize,
}

impl CannedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, query: &str, results: Vec<SearchResult>) -> Self {
        self.searches.insert(query.to_string(), results);
        self
    }

    pub fn with_detail(mut self, detail: MovieDetail) -> Self {
        self.details.insert(detail.id().to_string(), detail);
        self
    }

    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    pub fn detail_calls(&self) -> usize {
        self.detail_calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl MovieProvider for CannedProvider {
    async fn search(&self, query: &str) -> AppResult<Vec<SearchResult>> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        self.searches
            .get(query)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Movie not found!".to_string()))
    }

    async fn fetch_detail(&self, id: &str) -> AppResult<MovieDetail> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        self.details
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Incorrect IMDb ID.".to_string()))
    }

    fn name(&self) -> &'static str {
        "canned"
    }
}

pub fn search_result(id: &str, title: &str, poster: &str) -> SearchResult {
    SearchResult {
        id: id.to_string(),
        title: title.to_string(),
        year: "2005".to_string(),
        poster: Poster::from(poster.to_string()),
        media_type: "movie".to_string(),
    }
}

pub fn movie_detail(id: &str, title: &str) -> MovieDetail {
    MovieDetail {
        summary: search_result(id, title, "N/A"),
        rated: Some("R".to_string()),
        rating: Some(8.7),
        runtime: "136 min".to_string(),
        genre: "Action, Sci-Fi".to_string(),
        plot: "A computer hacker learns about the true nature of reality.".to_string(),
        director: "Lana Wachowski, Lilly Wachowski".to_string(),
        actors: "Keanu Reeves, Laurence Fishburne".to_string(),
        country: "United States".to_string(),
        language: "English".to_string(),
        awards: Some("Won 4 Oscars".to_string()),
        box_office: None,
        fetched_at: chrono::Utc::now(),
    }
}

// ============================================================================
// Mock OMDb server
// ============================================================================

#[derive(Clone, Default)]
struct MockState {
    requests: Arc<Mutex<Vec<HashMap<String, String>>>>,
    /// Keyed by "s=<title>" or "i=<id>"
    responses: Arc<Mutex<HashMap<String, (u16, Value)>>>,
}

/// In-process stand-in for the OMDb endpoint
pub struct MockOmdb {
    pub addr: SocketAddr,
    state: MockState,
    shutdown: tokio::sync::watch::Sender<bool>,
}

impl MockOmdb {
    pub async fn start() -> Self {
        let state = MockState::default();
        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);

        let app = Router::new()
            .route("/", get(handle_request))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock OMDb server");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .ok();
        });

        Self {
            addr,
            state,
            shutdown: shutdown_tx,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}/", self.addr)
    }

    /// Response for `?s=<query>`
    pub fn on_search(&self, query: &str, status: u16, body: Value) {
        self.state
            .responses
            .lock()
            .unwrap()
            .insert(format!("s={}", query), (status, body));
    }

    /// Response for `?i=<id>`
    pub fn on_detail(&self, id: &str, status: u16, body: Value) {
        self.state
            .responses
            .lock()
            .unwrap()
            .insert(format!("i={}", id), (status, body));
    }

    pub fn requests(&self) -> Vec<HashMap<String, String>> {
        self.state.requests.lock().unwrap().clone()
    }
}

impl Drop for MockOmdb {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

async fn handle_request(
    State(state): State<MockState>,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    state.requests.lock().unwrap().push(params.clone());

    let key = params
        .get("s")
        .map(|s| format!("s={}", s))
        .or_else(|| params.get("i").map(|i| format!("i={}", i)))
        .unwrap_or_default();

    let canned = state.responses.lock().unwrap().get(&key).cloned();
    match canned {
        Some((status, body)) => (
            StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            Json(body),
        ),
        None => (
            StatusCode::OK,
            Json(json!({ "Response": "False", "Error": "Movie not found!" })),
        ),
    }
}
