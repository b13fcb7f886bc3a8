use tracing::{debug, instrument, warn};

use crate::api;
use crate::error::{OfferError, Result};
use crate::model::JobOffer;

pub(crate) const JOB_OFFERS_PATH: &str = "job-offers";

/// Build the listing URL for an API base, tolerating a trailing slash.
pub(crate) fn job_offers_url(base_url: &str) -> String {
    format!("{}/{JOB_OFFERS_PATH}", base_url.trim_end_matches('/'))
}

#[instrument(skip(client))]
pub(crate) async fn list_job_offers(client: &reqwest::Client, url: &str) -> Result<Vec<JobOffer>> {
    let body = api::get_body(client, url).await?;
    let offers = parse_job_offers(url, &body)?;
    debug!(count = offers.len(), "parsed job offers");
    Ok(offers)
}

/// Decode a `/job-offers` body, keeping server order and duplicates as-is.
pub(crate) fn parse_job_offers(url: &str, body: &str) -> Result<Vec<JobOffer>> {
    let offers: Vec<JobOffer> = serde_json::from_str(body).map_err(|e| OfferError::Decode {
        url: url.to_owned(),
        source: e,
    })?;

    for offer in offers.iter().filter(|o| o.title.trim().is_empty()) {
        warn!(id = offer.id, "job offer has an empty title");
    }

    Ok(offers)
}
