use std::sync::Arc;

use chrono::Utc;

use crate::api::{ApiError, JobsApi};
use crate::document::Document;
use crate::route::job_id_from_path;
use crate::view::{JobDetailView, detail_title};

/// Drives the `/jobs/<id>` page.
pub struct DetailController {
    api: Arc<dyn JobsApi>,
    document: Arc<dyn Document>,
    site_name: String,
}

impl DetailController {
    pub fn new(api: Arc<dyn JobsApi>, document: Arc<dyn Document>, site_name: &str) -> Self {
        Self {
            api,
            document,
            site_name: site_name.to_string(),
        }
    }

    /// Does nothing when the path has no numeric id.
    pub async fn load_from_path(&self, path: &str) {
        match job_id_from_path(path) {
            Some(id) => self.load(id).await,
            None => tracing::debug!(%path, "no job id in path"),
        }
    }

    pub async fn load(&self, id: u64) {
        match self.api.get_job(id).await {
            Ok(job) => {
                self.document.set_title(&detail_title(&job, &self.site_name));
                self.document
                    .set_job_detail(JobDetailView::new(&job, Utc::now()));
            }
            Err(err @ ApiError::Application(_)) => {
                tracing::warn!(id, error = %err, "job not available");
                self.document
                    .set_job_detail(JobDetailView::Error("Job not found".to_string()));
            }
            Err(err) => {
                tracing::error!(id, error = %err, "loading job detail failed");
                self.document.set_job_detail(JobDetailView::Error(
                    "Failed to load job details".to_string(),
                ));
            }
        }
    }
}
