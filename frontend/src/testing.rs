//! Scripted in-process API for controller tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use common::{JobDetail, JobSummary, JobsPage};

use crate::api::{ApiError, ApiResult, JobsApi};

/// What the fake answers with.
#[derive(Debug, Clone)]
pub enum Reply<T> {
    Ok(T),
    /// `success: false` with this message.
    Fail(String),
    /// A body that is not JSON, like a proxy's error page.
    Garbled,
}

impl<T: Clone> Reply<T> {
    fn to_result(&self) -> ApiResult<T> {
        match self {
            Reply::Ok(value) => Ok(value.clone()),
            Reply::Fail(message) => Err(ApiError::Application(message.clone())),
            Reply::Garbled => Err(ApiError::Decode(
                serde_json::from_str::<()>("<html>").unwrap_err(),
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List { page: u32, page_size: u32 },
    Search { query: String, page: u32, page_size: u32 },
    Get { id: u64 },
}

pub struct FakeJobsApi {
    pub pages: Reply<JobsPage>,
    pub detail: Reply<JobDetail>,
    /// Simulated network latency for every call.
    pub latency: Duration,
    /// Overrides `latency` for searches with these queries.
    pub query_latency: HashMap<String, Duration>,
    calls: Mutex<Vec<Call>>,
}

impl FakeJobsApi {
    pub fn new(pages: Reply<JobsPage>, detail: Reply<JobDetail>) -> Self {
        Self {
            pages,
            detail,
            latency: Duration::ZERO,
            query_latency: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_pages(pages: Reply<JobsPage>) -> Self {
        Self::new(pages, Reply::Fail("Job not found".to_string()))
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn with_query_latency(mut self, query: &str, latency: Duration) -> Self {
        self.query_latency.insert(query.to_string(), latency);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn search_queries(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Search { query, .. } => Some(query),
                _ => None,
            })
            .collect()
    }

    async fn record(&self, call: Call) {
        let latency = match &call {
            Call::Search { query, .. } => self.query_latency.get(query).copied(),
            _ => None,
        }
        .unwrap_or(self.latency);

        self.calls.lock().unwrap().push(call);
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }
    }
}

#[async_trait]
impl JobsApi for FakeJobsApi {
    async fn list_jobs(&self, page: u32, page_size: u32) -> ApiResult<JobsPage> {
        self.record(Call::List { page, page_size }).await;
        self.pages.to_result()
    }

    async fn search_jobs(&self, query: &str, page: u32, page_size: u32) -> ApiResult<JobsPage> {
        self.record(Call::Search {
            query: query.to_string(),
            page,
            page_size,
        })
        .await;
        self.pages.to_result()
    }

    async fn get_job(&self, id: u64) -> ApiResult<JobDetail> {
        self.record(Call::Get { id }).await;
        self.detail.to_result()
    }
}

pub fn job(id: u64, title: &str, company: &str) -> JobSummary {
    JobSummary {
        id,
        title: title.to_string(),
        company_name: company.to_string(),
        location: "Paris".to_string(),
        first_seen_at: None,
    }
}

pub fn page_of(jobs: Vec<JobSummary>, total: u64, page: u32, page_size: u32) -> JobsPage {
    JobsPage {
        jobs,
        total,
        page,
        page_size,
        total_pages: total.div_ceil(u64::from(page_size)) as u32,
    }
}
