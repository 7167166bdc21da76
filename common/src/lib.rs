//! Wire types returned by the job board API.
//!
//! Field names follow the backend's JSON (camelCase).

use serde::{Deserialize, Deserializer, Serialize};

/// A job as it appears in search results and listing cards.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JobSummary {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub location: String,
    /// Raw timestamp; parsed only when it is displayed.
    pub first_seen_at: Option<String>,
}

/// A single job with its (rich text) description.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JobDetail {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub location: String,
    pub first_seen_at: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
}

/// One page of jobs plus the pagination numbers the server computed.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct JobsPage {
    /// The backend sends `null` rather than `[]` when nothing matched.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub jobs: Vec<JobSummary>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

impl JobsPage {
    /// `ceil(total / page_size)`, the value the server is expected to send
    /// in `totalPages`.
    pub fn expected_total_pages(&self) -> u32 {
        if self.page_size == 0 {
            return 0;
        }
        self.total.div_ceil(u64::from(self.page_size)) as u32
    }
}

/// `{success, data, error, message}` wrapper around every API payload.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
    pub message: Option<String>,
}
