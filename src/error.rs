/// All errors that can occur while retrieving job offers.
///
/// Every variant past construction is a flavour of "fetch failed": the
/// retrieval layer treats them uniformly.
#[derive(thiserror::Error, Debug)]
pub enum OfferError {
    /// The configured API base URL could not be parsed.
    #[error("invalid API base url {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server returned a non-success HTTP status code.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to read the response body as text.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// The body was not a list of job offers.
    #[error("malformed job offer payload from {url}: {source}")]
    Decode {
        url: String,
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, OfferError>;
