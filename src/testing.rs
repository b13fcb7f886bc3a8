//! Fixtures shared by the unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

use crate::client::OfferSource;
use crate::error::{OfferError, Result};
use crate::model::JobOffer;

pub(crate) fn offer(
    id: i64,
    title: &str,
    company: &str,
    location: Option<&str>,
    platform: &str,
) -> JobOffer {
    JobOffer {
        id,
        title: title.to_string(),
        company: company.to_string(),
        location: location.map(str::to_string),
        platform: platform.to_string(),
        url: None,
    }
}

/// Serve `router` on an ephemeral local port and return its base URL.
pub(crate) async fn serve(router: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// A base URL on which nothing is listening.
pub(crate) async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

/// Offer source answering with a canned outcome and counting its calls.
pub(crate) struct FakeSource {
    offers: Option<Vec<JobOffer>>,
    gate: Option<Arc<Notify>>,
    calls: AtomicUsize,
}

impl FakeSource {
    pub(crate) fn ok(offers: Vec<JobOffer>) -> Self {
        Self {
            offers: Some(offers),
            gate: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            offers: None,
            gate: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Hold every call until `gate` is notified.
    pub(crate) fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl OfferSource for FakeSource {
    async fn list_job_offers(&self) -> Result<Vec<JobOffer>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.offers.clone().ok_or_else(|| OfferError::UnexpectedStatus {
            url: "http://api.test/job-offers".to_string(),
            status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
        })
    }
}
