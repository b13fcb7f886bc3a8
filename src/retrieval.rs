use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, warn};

use crate::client::OfferSource;
use crate::error::Result;
use crate::model::JobOffer;

/// Snapshot of one retrieval: the offers currently held and whether the
/// fetch is still outstanding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffersState {
    pub offers: Vec<JobOffer>,
    pub loading: bool,
}

impl OffersState {
    /// The state of a freshly mounted retrieval.
    pub fn initial() -> Self {
        Self {
            offers: Vec::new(),
            loading: true,
        }
    }

    /// Apply the outcome of the fetch.
    ///
    /// Success replaces the offers wholesale. Failure is logged and leaves the
    /// offers untouched. Either way loading ends.
    pub fn settle(&mut self, outcome: Result<Vec<JobOffer>>) {
        match outcome {
            Ok(offers) => {
                debug!(count = offers.len(), "job offers loaded");
                self.offers = offers;
            }
            Err(err) => error!(error = %err, "failed to load job offers"),
        }
        self.loading = false;
    }
}

impl Default for OffersState {
    fn default() -> Self {
        Self::initial()
    }
}

/// A mounted job offer retrieval.
///
/// Mounting spawns the one and only fetch for this instance. Dropping the
/// retrieval unmounts it: the fetch is aborted and a late result is never
/// applied.
#[derive(Debug)]
pub struct OfferRetrieval {
    state: watch::Receiver<OffersState>,
    task: JoinHandle<()>,
}

impl OfferRetrieval {
    /// Start retrieving offers from `source`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn mount<S>(source: Arc<S>) -> Self
    where
        S: OfferSource + Send + Sync + 'static,
    {
        let (tx, rx) = watch::channel(OffersState::initial());

        let task = tokio::spawn(async move {
            let outcome = source.list_job_offers().await;
            if tx.is_closed() {
                debug!("retrieval unmounted before job offers arrived, discarding result");
                return;
            }
            tx.send_modify(|state| state.settle(outcome));
        });

        Self { state: rx, task }
    }

    /// The current state.
    pub fn snapshot(&self) -> OffersState {
        self.state.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    /// Observe state changes.
    pub fn subscribe(&self) -> watch::Receiver<OffersState> {
        self.state.clone()
    }

    /// Wait until the fetch has settled and return the resulting state.
    ///
    /// If the fetch task died without settling, the last known state is
    /// returned as-is, still loading.
    pub async fn settled(&mut self) -> OffersState {
        if self.state.wait_for(|state| !state.loading).await.is_err() {
            warn!("job offer retrieval ended without settling");
        }
        self.snapshot()
    }
}

impl Drop for OfferRetrieval {
    fn drop(&mut self) {
        self.task.abort();
    }
}
