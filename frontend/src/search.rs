//! The search box and its results dropdown.
//!
//! Keystrokes are debounced on the tokio timer: each input aborts the pending
//! timer and starts a new one. When a timer fires the request runs on its own
//! task, so it is never cancelled by later input. Responses are shown in the
//! order they arrive; a slow response for an older query can replace the
//! dropdown of a newer one.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::task::JoinHandle;

use crate::api::JobsApi;
use crate::config::Config;
use crate::document::Document;
use crate::urls::jobs_page_url;
use crate::view::SearchDropdown;

/// A key press as delivered by the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress<'a> {
    pub key: &'a str,
    pub ctrl: bool,
    pub meta: bool,
}

impl<'a> KeyPress<'a> {
    pub fn plain(key: &'a str) -> Self {
        Self {
            key,
            ctrl: false,
            meta: false,
        }
    }
}

/// Where a document-level click landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    SearchInput,
    SearchResults,
    Elsewhere,
}

/// Whether the page should suppress the browser's default for an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    PreventDefault,
    Default,
}

#[derive(Debug, Default)]
struct SearchState {
    pending: Option<JoinHandle<()>>,
    current_query: String,
    in_flight: bool,
}

/// One per page load. Cloning shares the same state.
#[derive(Clone)]
pub struct SearchController {
    api: Arc<dyn JobsApi>,
    document: Arc<dyn Document>,
    config: Arc<Config>,
    state: Arc<Mutex<SearchState>>,
}

impl SearchController {
    pub fn new(api: Arc<dyn JobsApi>, document: Arc<dyn Document>, config: Arc<Config>) -> Self {
        Self {
            api,
            document,
            config,
            state: Arc::new(Mutex::new(SearchState::default())),
        }
    }

    fn state(&self) -> MutexGuard<'_, SearchState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// The search box's value changed. Must run inside a tokio runtime.
    pub fn on_input(&self, value: &str) {
        let query = value.trim().to_string();
        let mut state = self.state();

        if let Some(timer) = state.pending.take() {
            timer.abort();
        }

        if query.chars().count() < self.config.min_search_length {
            state.current_query.clear();
            drop(state);
            self.document.hide_search_results();
            return;
        }

        let controller = self.clone();
        let delay = self.config.debounce_delay;
        state.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            tracing::debug!(%query, "debounce elapsed");
            tokio::spawn(async move { controller.perform_search(&query).await });
        }));
    }

    /// Key pressed while the search box has focus.
    pub fn on_keydown(&self, key: KeyPress<'_>, value: &str) -> KeyOutcome {
        match key.key {
            "Enter" => {
                let query = value.trim();
                if !query.is_empty() {
                    self.document.navigate(&jobs_page_url(query));
                }
                KeyOutcome::PreventDefault
            }
            "Escape" => {
                self.document.hide_search_results();
                KeyOutcome::Default
            }
            _ => KeyOutcome::Default,
        }
    }

    pub fn on_document_click(&self, target: ClickTarget) {
        if target == ClickTarget::Elsewhere {
            self.document.hide_search_results();
        }
    }

    /// `/` anywhere on the page focuses the search box, unless a text field
    /// (the search box or another one) has focus or a modifier is held.
    pub fn on_global_keydown(&self, key: KeyPress<'_>) -> KeyOutcome {
        if key.key != "/" || key.ctrl || key.meta || self.document.input_focused() {
            return KeyOutcome::Default;
        }
        self.document.focus_search();
        KeyOutcome::PreventDefault
    }

    /// Fetches the first page of matches for `query` and shows the dropdown.
    /// Skipped when the same query is already in flight.
    pub async fn perform_search(&self, query: &str) {
        {
            let mut state = self.state();
            if state.in_flight && state.current_query == query {
                tracing::debug!(%query, "identical search already in flight");
                return;
            }
            state.current_query = query.to_string();
            state.in_flight = true;
        }

        let limit = self.config.search_results_limit;
        let dropdown = match self.api.search_jobs(query, 1, limit).await {
            Ok(page) => SearchDropdown::from_jobs(&page.jobs, query, limit as usize),
            Err(err) => {
                tracing::error!(%query, error = %err, "search failed");
                SearchDropdown::error()
            }
        };
        self.document.show_search_results(dropdown);

        self.state().in_flight = false;
    }

    /// The last query sent (or about to be sent), empty after a short input.
    pub fn current_query(&self) -> String {
        self.state().current_query.clone()
    }

    pub fn is_searching(&self) -> bool {
        self.state().in_flight
    }
}
