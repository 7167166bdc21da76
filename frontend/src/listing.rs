use std::sync::Arc;

use chrono::Utc;

use crate::api::{ApiError, JobsApi};
use crate::document::Document;
use crate::route::PageUrl;
use crate::urls::ListingParams;
use crate::view::{JobsHeader, JobsList, Pagination};

const LOAD_FAILED: &str = "Failed to load jobs";
const LOAD_FAILED_RETRY: &str = "Failed to load jobs. Please try again.";

/// Drives the `/jobs` page: cards, header and pagination.
pub struct ListingController {
    api: Arc<dyn JobsApi>,
    document: Arc<dyn Document>,
}

impl ListingController {
    pub fn new(api: Arc<dyn JobsApi>, document: Arc<dyn Document>) -> Self {
        Self { api, document }
    }

    /// Loads the page described by the URL's `q`, `page` and `page_size`.
    pub async fn load_from_url(&self, url: &PageUrl) {
        let params = ListingParams::from_url(url);
        if !params.query.is_empty() {
            self.document.set_search_value(&params.query);
        }
        self.load(&params).await;
    }

    pub async fn load(&self, params: &ListingParams) {
        self.document.set_jobs_list(JobsList::Loading);

        let result = if params.query.is_empty() {
            self.api.list_jobs(params.page, params.page_size).await
        } else {
            self.api
                .search_jobs(&params.query, params.page, params.page_size)
                .await
        };

        let page = match result {
            Ok(page) => page,
            Err(err) => {
                tracing::error!(
                    query = %params.query,
                    page = params.page,
                    error = %err,
                    "loading jobs failed"
                );
                let message = match &err {
                    ApiError::Application(message) if !message.is_empty() => message.as_str(),
                    ApiError::Application(_) => LOAD_FAILED,
                    _ => LOAD_FAILED_RETRY,
                };
                self.document
                    .set_jobs_list(JobsList::Error(message.to_string()));
                return;
            }
        };

        tracing::debug!(total = page.total, page = page.page, "jobs loaded");
        self.document
            .set_jobs_list(JobsList::from_jobs(&page.jobs, Utc::now()));
        self.document
            .set_jobs_header(JobsHeader::new(page.total, &params.query));
        self.document
            .set_pagination(Pagination::for_page(&page, &params.query));
    }
}
