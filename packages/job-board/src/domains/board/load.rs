//! Initial fetch of the board.
//!
//! `Loading → Ready` or `Loading → Error`. Both end states are final for a
//! controller instance; recovering from an error means building a new board.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tracing::{error, info, warn};

use crate::domains::jobs::{JobStore, SharedStore};
use crate::kernel::BaseJobService;

pub const LOAD_FAILED_MESSAGE: &str = "Failed to fetch jobs. Please try refreshing the page.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    Error(String),
}

impl LoadState {
    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready)
    }

    /// Text shown in place of the board, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            LoadState::Loading => Some("Loading..."),
            LoadState::Ready => None,
            LoadState::Error(message) => Some(message),
        }
    }
}

pub struct LoadController {
    store: SharedStore,
    service: Arc<dyn BaseJobService>,
    state: watch::Sender<LoadState>,
    started: AtomicBool,
}

impl LoadController {
    pub fn new(store: SharedStore, service: Arc<dyn BaseJobService>) -> Self {
        let (state, _rx) = watch::channel(LoadState::Loading);
        Self {
            store,
            service,
            state,
            started: AtomicBool::new(false),
        }
    }

    pub fn state(&self) -> LoadState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<LoadState> {
        self.state.subscribe()
    }

    /// Fetch every job into the store. Runs once; later calls return the
    /// current state without issuing a request.
    pub async fn start(&self) -> LoadState {
        if self.started.swap(true, Ordering::SeqCst) {
            warn!("Load already started; ignoring");
            return self.state();
        }

        self.state.send_replace(LoadState::Loading);
        info!("Fetching jobs");

        let next = match self.service.list_jobs().await {
            Ok(jobs) => {
                let store = JobStore::new(jobs);
                info!(count = store.len(), "Jobs loaded");
                self.store.replace(store);
                LoadState::Ready
            }
            Err(e) => {
                error!(error = %e, "Error fetching jobs");
                self.store.replace(JobStore::default());
                LoadState::Error(LOAD_FAILED_MESSAGE.to_string())
            }
        };

        self.state.send_replace(next.clone());
        next
    }
}
