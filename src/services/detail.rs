use std::sync::Arc;

use tokio::{sync::RwLock, task::JoinHandle};

use crate::{
    models::{MovieDetail, RequestState},
    services::{cancel::CancelToken, providers::MovieProvider},
};

pub type DetailState = RequestState<MovieDetail>;

/// The selection currently driving the overlay
struct Activation {
    id: String,
    token: CancelToken,
}

#[derive(Default)]
struct DetailInner {
    state: DetailState,
    active: Option<Activation>,
}

/// Fetches full details for the selected title
///
/// Each selection gets its own [`CancelToken`]. Selecting again, or
/// closing, cancels the previous token before anything else happens, and a
/// fetch only writes state after re-checking its token under the state
/// lock. A late response for a superseded title is therefore dropped.
#[derive(Clone)]
pub struct DetailController {
    provider: Arc<dyn MovieProvider>,
    inner: Arc<RwLock<DetailInner>>,
}

impl DetailController {
    pub fn new(provider: Arc<dyn MovieProvider>) -> Self {
        Self {
            provider,
            inner: Arc::new(RwLock::new(DetailInner::default())),
        }
    }

    /// Sets the selected identifier
    ///
    /// `None` or a blank id deactivates the controller. Otherwise a fetch is
    /// spawned on the runtime and its handle returned.
    pub async fn select(&self, id: Option<&str>) -> Option<JoinHandle<()>> {
        let id = id.map(str::trim).filter(|id| !id.is_empty());

        let mut inner = self.inner.write().await;

        if let Some(previous) = inner.active.take() {
            previous.token.cancel();
            tracing::debug!(title_id = %previous.id, "Superseded detail request cancelled");
        }

        let Some(id) = id else {
            inner.state = RequestState::Idle;
            return None;
        };

        let token = CancelToken::new();
        inner.active = Some(Activation {
            id: id.to_string(),
            token: token.clone(),
        });
        inner.state = RequestState::Loading;
        drop(inner);

        let controller = self.clone();
        let id = id.to_string();
        Some(tokio::spawn(async move { controller.load(id, token).await }))
    }

    /// Closes the overlay
    pub async fn close(&self) {
        self.select(None).await;
    }

    pub async fn state(&self) -> DetailState {
        self.inner.read().await.state.clone()
    }

    /// Identifier of the active selection, if any
    pub async fn current_id(&self) -> Option<String> {
        self.inner
            .read()
            .await
            .active
            .as_ref()
            .map(|active| active.id.clone())
    }

    async fn load(&self, id: String, token: CancelToken) {
        let Some(result) = token
            .run_until_cancelled(self.provider.fetch_detail(&id))
            .await
        else {
            tracing::debug!(title_id = %id, "Detail request aborted");
            return;
        };

        let mut inner = self.inner.write().await;
        if token.is_cancelled() {
            tracing::debug!(title_id = %id, "Discarding response for superseded selection");
            return;
        }

        inner.state = match result {
            Ok(detail) => RequestState::Success(detail),
            Err(e) => {
                tracing::warn!(
                    title_id = %id,
                    error = %e,
                    provider = self.provider.name(),
                    "Detail fetch failed"
                );
                RequestState::Failure(e.user_message())
            }
        };
    }
}
