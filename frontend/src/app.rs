use std::sync::Arc;

use crate::api::JobsApi;
use crate::config::Config;
use crate::detail::DetailController;
use crate::document::Document;
use crate::listing::ListingController;
use crate::route::{PageKind, PageUrl};
use crate::search::SearchController;

/// Everything wired up for one page load.
pub struct App {
    config: Arc<Config>,
    api: Arc<dyn JobsApi>,
    document: Arc<dyn Document>,
    search: SearchController,
}

impl App {
    pub fn new(config: Config, api: Arc<dyn JobsApi>, document: Arc<dyn Document>) -> Self {
        let config = Arc::new(config);
        let search = SearchController::new(api.clone(), document.clone(), config.clone());
        Self {
            config,
            api,
            document,
            search,
        }
    }

    /// The search box handlers, wired on every page.
    pub fn search(&self) -> &SearchController {
        &self.search
    }

    /// Runs the initializer for the page at `url` and reports which one ran.
    pub async fn start(&self, url: &PageUrl) -> PageKind {
        let kind = url.kind();
        tracing::debug!(path = url.path(), ?kind, "starting page");

        match kind {
            PageKind::Home => self.document.focus_search(),
            PageKind::Jobs => {
                ListingController::new(self.api.clone(), self.document.clone())
                    .load_from_url(url)
                    .await
            }
            PageKind::JobDetail => {
                DetailController::new(
                    self.api.clone(),
                    self.document.clone(),
                    &self.config.site_name,
                )
                .load_from_path(url.path())
                .await
            }
            PageKind::Unknown => {}
        }

        kind
    }
}
