use std::future::Future;

use tracing::instrument;

use crate::api;
use crate::error::{OfferError, Result};
use crate::model::JobOffer;

/// Anything able to list job offers.
///
/// [`OfferRetrieval`](crate::OfferRetrieval) depends on this seam rather than
/// on [`OfferClient`] directly.
pub trait OfferSource {
    /// List every job offer, in the order the source returns them.
    fn list_job_offers(&self) -> impl Future<Output = Result<Vec<JobOffer>>> + Send;
}

/// The main entry point for talking to the job-tracker API.
///
/// `OfferClient` wraps a [`reqwest::Client`] and the API base URL. Every call
/// performs exactly one request: there is no retry, backoff or caching.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> job_offers::Result<()> {
/// use job_offers::OfferClient;
///
/// let client = OfferClient::new("http://localhost:8000")?;
/// let offers = client.list_job_offers().await?;
/// println!("Found {} offers", offers.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct OfferClient {
    http: reqwest::Client,
    offers_url: String,
}

impl OfferClient {
    /// Create a new client with default transport settings.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a new client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure timeouts, proxies, headers, etc.
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Result<Self> {
        reqwest::Url::parse(base_url).map_err(|e| OfferError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            http: client,
            offers_url: api::job_offers::job_offers_url(base_url),
        })
    }

    /// The URL listed by [`OfferClient::list_job_offers`].
    pub fn offers_url(&self) -> &str {
        &self.offers_url
    }

    /// Fetch every job offer.
    ///
    /// An empty list is a successful result. Transport failures, non-success
    /// statuses and bodies that do not match the offer schema are errors.
    #[instrument(skip(self), fields(url = %self.offers_url))]
    pub async fn list_job_offers(&self) -> Result<Vec<JobOffer>> {
        api::job_offers::list_job_offers(&self.http, &self.offers_url).await
    }
}

impl OfferSource for OfferClient {
    async fn list_job_offers(&self) -> Result<Vec<JobOffer>> {
        OfferClient::list_job_offers(self).await
    }
}
