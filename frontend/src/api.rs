//! Client for the job board's JSON API.

use async_trait::async_trait;
use common::{ApiEnvelope, JobDetail, JobsPage};
use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::Config;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be sent or the body could not be read.
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
    /// Well-formed response with `success: false`.
    #[error("{0}")]
    Application(String),
    /// `success: true` without a `data` payload.
    #[error("response carried no data")]
    MissingData,
}

pub type ApiResult<T> = Result<T, ApiError>;

/// The three endpoints the pages read from.
#[async_trait]
pub trait JobsApi: Send + Sync {
    /// `GET /api/jobs?page=&page_size=`
    async fn list_jobs(&self, page: u32, page_size: u32) -> ApiResult<JobsPage>;

    /// `GET /api/jobs/search?q=&page=&page_size=`
    async fn search_jobs(&self, query: &str, page: u32, page_size: u32) -> ApiResult<JobsPage>;

    /// `GET /api/jobs/:id`
    async fn get_job(&self, id: u64) -> ApiResult<JobDetail>;
}

/// [`JobsApi`] over HTTP with reqwest.
#[derive(Debug, Clone)]
pub struct HttpJobsApi {
    client: Client,
    base_url: String,
}

impl HttpJobsApi {
    pub fn new(config: &Config) -> ApiResult<Self> {
        let client = Client::builder().timeout(config.request_timeout).build()?;
        Ok(Self::with_client(client, &config.api_base_url))
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ApiResult<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, ?query, "fetching");

        // Failures come back as 4xx/5xx with the same envelope, so the status
        // code is not checked before decoding.
        let body = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await?
            .bytes()
            .await?;

        let envelope: ApiEnvelope<T> = serde_json::from_slice(&body)?;
        if !envelope.success {
            return Err(ApiError::Application(
                envelope.error.or(envelope.message).unwrap_or_default(),
            ));
        }
        envelope.data.ok_or(ApiError::MissingData)
    }
}

#[async_trait]
impl JobsApi for HttpJobsApi {
    async fn list_jobs(&self, page: u32, page_size: u32) -> ApiResult<JobsPage> {
        self.get(
            "/api/jobs",
            &[("page", page.to_string()), ("page_size", page_size.to_string())],
        )
        .await
    }

    async fn search_jobs(&self, query: &str, page: u32, page_size: u32) -> ApiResult<JobsPage> {
        self.get(
            "/api/jobs/search",
            &[
                ("q", query.to_string()),
                ("page", page.to_string()),
                ("page_size", page_size.to_string()),
            ],
        )
        .await
    }

    async fn get_job(&self, id: u64) -> ApiResult<JobDetail> {
        self.get(&format!("/api/jobs/{id}"), &[]).await
    }
}
