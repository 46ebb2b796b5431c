//! Provider fake whose responses are released by the test, one per call.

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
};

use tokio::sync::oneshot;

use crate::{
    error::{AppError, AppResult},
    models::{MovieDetail, Poster, SearchResult},
    services::providers::MovieProvider,
};

type Gate<T> = oneshot::Receiver<AppResult<T>>;

#[derive(Default)]
pub struct GatedProvider {
    searches: Mutex<HashMap<String, Gate<Vec<SearchResult>>>>,
    details: Mutex<HashMap<String, Gate<MovieDetail>>>,
    search_calls: AtomicUsize,
    detail_calls: AtomicUsize,
}

impl GatedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// The next search for `query` waits until the returned sender fires
    pub fn gate_search(&self, query: &str) -> oneshot::Sender<AppResult<Vec<SearchResult>>> {
        let (tx, rx) = oneshot::channel();
        self.searches.lock().unwrap().insert(query.to_string(), rx);
        tx
    }

    /// The next detail fetch for `id` waits until the returned sender fires
    pub fn gate_detail(&self, id: &str) -> oneshot::Sender<AppResult<MovieDetail>> {
        let (tx, rx) = oneshot::channel();
        self.details.lock().unwrap().insert(id.to_string(), rx);
        tx
    }

    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    pub fn detail_calls(&self) -> usize {
        self.detail_calls.load(Ordering::SeqCst)
    }
}

async fn release<T>(gate: Option<Gate<T>>, key: &str) -> AppResult<T> {
    match gate {
        Some(rx) => rx
            .await
            .unwrap_or_else(|_| Err(AppError::Internal(format!("gate for {} dropped", key)))),
        None => Err(AppError::Internal(format!("no gate for {}", key))),
    }
}

#[async_trait::async_trait]
impl MovieProvider for GatedProvider {
    async fn search(&self, query: &str) -> AppResult<Vec<SearchResult>> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        let gate = self.searches.lock().unwrap().remove(query);
        release(gate, query).await
    }

    async fn fetch_detail(&self, id: &str) -> AppResult<MovieDetail> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        let gate = self.details.lock().unwrap().remove(id);
        release(gate, id).await
    }

    fn name(&self) -> &'static str {
        "gated"
    }
}

pub fn search_result(id: &str, title: &str) -> SearchResult {
    SearchResult {
        id: id.to_string(),
        title: title.to_string(),
        year: "2005".to_string(),
        poster: Poster::Unavailable,
        media_type: "movie".to_string(),
    }
}

pub fn movie_detail(id: &str, title: &str) -> MovieDetail {
    MovieDetail {
        summary: search_result(id, title),
        rated: Some("PG-13".to_string()),
        rating: Some(8.2),
        runtime: "140 min".to_string(),
        genre: "Action".to_string(),
        plot: "A plot.".to_string(),
        director: "Someone".to_string(),
        actors: "Some Actors".to_string(),
        country: "United States".to_string(),
        language: "English".to_string(),
        awards: None,
        box_office: None,
        fetched_at: chrono::Utc::now(),
    }
}
