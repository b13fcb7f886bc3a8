pub(crate) mod job_offers;

use tracing::debug;

use crate::error::{OfferError, Result};

/// Fetch a URL and return the response body of a successful reply.
pub(crate) async fn get_body(client: &reqwest::Client, url: &str) -> Result<String> {
    debug!(url, "fetching resource");

    let response = client.get(url).send().await.map_err(|e| OfferError::Http {
        url: url.to_owned(),
        source: e,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(OfferError::UnexpectedStatus {
            url: url.to_owned(),
            status,
        });
    }

    response.text().await.map_err(|e| OfferError::ResponseBody {
        url: url.to_owned(),
        source: e,
    })
}
