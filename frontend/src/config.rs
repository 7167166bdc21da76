use std::time::Duration;

/// Default number of jobs per listing page. Links omit `page_size` when it
/// equals this value.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Runtime settings for the page controllers.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_base_url: String,
    /// Quiet period after the last keystroke before a search is issued.
    pub debounce_delay: Duration,
    /// Queries shorter than this (after trimming) never hit the API.
    pub min_search_length: usize,
    /// Maximum number of entries in the search dropdown.
    pub search_results_limit: u32,
    /// Appended to the document title on the detail page.
    pub site_name: String,
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:8080".to_string(),
            debounce_delay: Duration::from_millis(300),
            min_search_length: 2,
            search_results_limit: 5,
            site_name: "Bobber".to_string(),
            request_timeout: Duration::from_secs(10),
        }
    }
}

impl Config {
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    pub fn with_debounce_delay(mut self, delay: Duration) -> Self {
        self.debounce_delay = delay;
        self
    }

    pub fn with_search_results_limit(mut self, limit: u32) -> Self {
        self.search_results_limit = limit;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}
