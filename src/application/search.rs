//! Debounced live search.
//!
//! Every input restarts the quiet period. The previous pending task is
//! aborted whether it is still waiting or already searching, so at most one
//! search is outstanding and results never arrive out of order.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::domain::{Page, Product};
use crate::port::SearchBackend;

/// Quiet period before a search is issued.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Message shown when a search fails.
pub const SEARCH_ERROR_MESSAGE: &str = "an error occurred";

/// Result of one debounced search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SearchOutcome {
    Results { query: String, page: Page<Product> },
    Failed { query: String, message: String },
}

impl SearchOutcome {
    #[must_use]
    pub fn query(&self) -> &str {
        match self {
            Self::Results { query, .. } | Self::Failed { query, .. } => query,
        }
    }
}

/// Debounces search input and reports outcomes on a channel.
pub struct LiveSearch {
    backend: Arc<dyn SearchBackend>,
    window: Duration,
    outcomes: mpsc::UnboundedSender<SearchOutcome>,
    pending: Option<JoinHandle<()>>,
}

impl LiveSearch {
    /// Create a driver and the receiver its outcomes are delivered on.
    pub fn new(
        backend: Arc<dyn SearchBackend>,
        window: Duration,
    ) -> (Self, mpsc::UnboundedReceiver<SearchOutcome>) {
        let (outcomes, receiver) = mpsc::unbounded_channel();
        let search = Self {
            backend,
            window,
            outcomes,
            pending: None,
        };
        (search, receiver)
    }

    /// Register new input, superseding any pending search.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn input(&mut self, query: impl Into<String>) {
        self.cancel();

        let query = query.into().trim().to_string();
        let backend = Arc::clone(&self.backend);
        let outcomes = self.outcomes.clone();
        let window = self.window;

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(window).await;
            debug!(query = %query, "Running debounced search");

            let outcome = match backend.search(&query, 1).await {
                Ok(page) => SearchOutcome::Results { query, page },
                Err(error) => {
                    warn!(query = %query, error = %error, "Search failed");
                    SearchOutcome::Failed {
                        query,
                        message: SEARCH_ERROR_MESSAGE.to_string(),
                    }
                }
            };

            // The receiver may be gone if the caller stopped listening.
            let _ = outcomes.send(outcome);
        }));
    }

    /// Abort the pending search, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// Stop accepting input and let the pending search, if any, complete.
    ///
    /// The outcome channel closes once that search has reported, so the
    /// receiver can be drained until it yields `None`.
    pub fn finish(mut self) {
        // Detach rather than abort; the task owns the last sender clone.
        self.pending.take();
    }
}

impl Drop for LiveSearch {
    fn drop(&mut self) {
        self.cancel();
    }
}
