use serde::Deserialize;

/// A single job offer as listed by the job-tracker API.
///
/// Offers are read-only snapshots: a fresh `Vec<JobOffer>` is produced by
/// every successful fetch and replaces the previous one wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JobOffer {
    pub id: i64,
    pub title: String,
    pub company: String,
    /// `null` and a missing field both decode to `None`.
    pub location: Option<String>,
    pub platform: String,
    pub url: Option<String>,
}
