use std::{future::Future, sync::Arc};

use tokio::sync::watch;

/// Signals that a still-pending request's result should be discarded
///
/// Clones share one flag. Cancelling is sticky: once set it never resets,
/// so a fresh activation always gets a fresh token.
#[derive(Clone, Debug)]
pub struct CancelToken {
    flag: Arc<watch::Sender<bool>>,
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}

impl CancelToken {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { flag: Arc::new(tx) }
    }

    pub fn cancel(&self) {
        self.flag.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.flag.borrow()
    }

    /// Resolves once [`CancelToken::cancel`] has been called
    pub async fn cancelled(&self) {
        let mut rx = self.flag.subscribe();
        loop {
            let cancelled = *rx.borrow_and_update();
            if cancelled {
                return;
            }
            if rx.changed().await.is_err() {
                // Sender gone: nothing can cancel any more.
                std::future::pending::<()>().await;
            }
        }
    }

    /// Drives `fut` unless the token fires first
    ///
    /// Returns `None` when cancelled; the future is dropped, which aborts any
    /// I/O it had in flight.
    pub async fn run_until_cancelled<F>(&self, fut: F) -> Option<F::Output>
    where
        F: Future,
    {
        tokio::select! {
            biased;
            _ = self.cancelled() => None,
            output = fut => Some(output),
        }
    }
}
