//! The mounted product list: one fetch, one view state, one owner.
//!
//! # Design
//! `mount` moves the fetch onto a worker thread and hands back a
//! `ProductList` in `Loading`. The worker never touches the view state; it
//! sends its outcome over a channel and the owner applies it in `poll` or
//! `wait`. The pending fetch belongs to the component, so dropping the
//! component cancels it and a late outcome is thrown away.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use crossbeam_channel::{bounded, Receiver, TryRecvError};
use tracing::debug;

use crate::client::CatalogClient;
use crate::error::CatalogError;
use crate::render::{render_detail, render_list, DetailView, ListView};
use crate::state::ViewState;
use crate::transport::{fetch_products, Transport};
use crate::types::Product;

type FetchOutcome = Result<Vec<Product>, CatalogError>;

/// A fetch that has not been applied yet.
struct PendingFetch {
    outcome_rx: Receiver<FetchOutcome>,
    cancelled: Arc<AtomicBool>,
}

impl Drop for PendingFetch {
    fn drop(&mut self) {
        self.cancelled.store(true, Ordering::Release);
    }
}

pub struct ProductList {
    state: ViewState,
    pending: Option<PendingFetch>,
}

impl ProductList {
    /// Start the single catalog fetch and return the list in `Loading`.
    pub fn mount<T>(client: CatalogClient, transport: T) -> Self
    where
        T: Transport + Send + 'static,
    {
        let (outcome_tx, outcome_rx) = bounded(1);
        let cancelled = Arc::new(AtomicBool::new(false));
        let worker_cancelled = Arc::clone(&cancelled);

        let spawned = thread::Builder::new()
            .name("catalog-fetch".to_string())
            .spawn(move || {
                let outcome = fetch_products(&client, &transport);
                if worker_cancelled.load(Ordering::Acquire) {
                    debug!("product list unmounted; discarding fetch outcome");
                    return;
                }
                // The receiver may be gone if the owner dropped between the
                // check above and here.
                let _ = outcome_tx.send(outcome);
            });

        let state = match spawned {
            Ok(_) => ViewState::Loading,
            Err(error) => ViewState::from_outcome(Err(CatalogError::TransportError(format!(
                "could not start fetch worker: {error}"
            )))),
        };
        let pending = matches!(state, ViewState::Loading).then(|| PendingFetch {
            outcome_rx,
            cancelled,
        });

        Self { state, pending }
    }

    /// Apply the fetch outcome if it has arrived. Returns `true` when the
    /// state changed.
    pub fn poll(&mut self) -> bool {
        let Some(pending) = &self.pending else {
            return false;
        };
        match pending.outcome_rx.try_recv() {
            Ok(outcome) => {
                self.apply(outcome);
                true
            }
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Disconnected) => {
                self.apply(Err(worker_lost()));
                true
            }
        }
    }

    /// Block until the fetch outcome is applied. Returns immediately if it
    /// already was.
    pub fn wait(&mut self) -> &ViewState {
        if let Some(pending) = &self.pending {
            let outcome = pending.outcome_rx.recv().unwrap_or_else(|_| Err(worker_lost()));
            self.apply(outcome);
        }
        &self.state
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn select(&mut self, id: &str) -> bool {
        self.state.select(id)
    }

    pub fn dismiss(&mut self) {
        self.state.dismiss();
    }

    pub fn list_view(&self) -> ListView {
        render_list(&self.state)
    }

    pub fn detail_view(&self) -> Option<DetailView> {
        render_detail(&self.state)
    }

    fn apply(&mut self, outcome: FetchOutcome) {
        self.pending = None;
        self.state = ViewState::from_outcome(outcome);
    }
}

fn worker_lost() -> CatalogError {
    CatalogError::TransportError("fetch worker exited without a result".to_string())
}
