//! The rendering sink the controllers write into.

use std::sync::{Mutex, MutexGuard, PoisonError};

use maud::Render;

use crate::view::{JobDetailView, JobsHeader, JobsList, Pagination, SearchDropdown};

pub const SEARCH_INPUT_ID: &str = "search-input";

/// The displayed page, as seen by the controllers.
///
/// Each method replaces the content of one container; none of them fail.
pub trait Document: Send + Sync {
    /// Replaces the dropdown content and makes it visible.
    fn show_search_results(&self, dropdown: SearchDropdown);
    /// Hides the dropdown, keeping its last content.
    fn hide_search_results(&self);
    fn set_jobs_list(&self, list: JobsList);
    fn set_jobs_header(&self, header: JobsHeader);
    /// None clears the pagination container.
    fn set_pagination(&self, pagination: Option<Pagination>);
    fn set_job_detail(&self, view: JobDetailView);
    fn set_title(&self, title: &str);
    fn set_search_value(&self, value: &str);
    fn focus_search(&self);
    /// True when any text field, the search box included, has focus.
    fn input_focused(&self) -> bool;
    fn navigate(&self, url: &str);
}

/// Everything an [`HtmlDocument`] currently displays.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentState {
    pub title: String,
    pub search_value: String,
    /// Id of the text field holding focus, if any.
    pub focused_input: Option<String>,
    pub search_results: Option<SearchDropdown>,
    pub search_results_visible: bool,
    pub jobs_list: Option<JobsList>,
    pub jobs_header: Option<JobsHeader>,
    pub pagination: Option<Pagination>,
    pub job_detail: Option<JobDetailView>,
    /// Every URL navigated to, oldest first.
    pub navigations: Vec<String>,
}

/// In-memory document that keeps the current view of every container and
/// renders it to markup on demand.
#[derive(Debug, Default)]
pub struct HtmlDocument {
    state: Mutex<DocumentState>,
}

impl HtmlDocument {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            state: Mutex::new(DocumentState {
                title: title.into(),
                ..Default::default()
            }),
        }
    }

    fn state(&self) -> MutexGuard<'_, DocumentState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Moves focus to the text field with this id.
    pub fn focus_input(&self, id: &str) {
        self.state().focused_input = Some(id.to_string());
    }

    pub fn search_focused(&self) -> bool {
        self.state().focused_input.as_deref() == Some(SEARCH_INPUT_ID)
    }

    pub fn snapshot(&self) -> DocumentState {
        self.state().clone()
    }

    pub fn search_results_html(&self) -> String {
        render_or_empty(self.state().search_results.as_ref())
    }

    pub fn jobs_list_html(&self) -> String {
        render_or_empty(self.state().jobs_list.as_ref())
    }

    pub fn pagination_html(&self) -> String {
        render_or_empty(self.state().pagination.as_ref())
    }

    pub fn job_detail_html(&self) -> String {
        render_or_empty(self.state().job_detail.as_ref())
    }

    /// The whole page body: one element per container.
    pub fn to_html(&self) -> String {
        let state = self.snapshot();
        let results_class = if state.search_results_visible {
            "search-results show"
        } else {
            "search-results"
        };

        maud::html! {
            title { (state.title) }
            input id=(SEARCH_INPUT_ID) type="text" value=(state.search_value);
            div id="search-results" class=(results_class) {
                @if let Some(results) = &state.search_results { (results) }
            }
            @if let Some(header) = &state.jobs_header { (header) }
            div id="jobs-list" {
                @if let Some(list) = &state.jobs_list { (list) }
            }
            div id="pagination" {
                @if let Some(pagination) = &state.pagination { (pagination) }
            }
            div id="job-detail" {
                @if let Some(detail) = &state.job_detail { (detail) }
            }
        }
        .into_string()
    }
}

fn render_or_empty<T: Render>(view: Option<&T>) -> String {
    view.map(|view| view.render().into_string())
        .unwrap_or_default()
}

impl Document for HtmlDocument {
    fn show_search_results(&self, dropdown: SearchDropdown) {
        let mut state = self.state();
        state.search_results = Some(dropdown);
        state.search_results_visible = true;
    }

    fn hide_search_results(&self) {
        self.state().search_results_visible = false;
    }

    fn set_jobs_list(&self, list: JobsList) {
        self.state().jobs_list = Some(list);
    }

    fn set_jobs_header(&self, header: JobsHeader) {
        self.state().jobs_header = Some(header);
    }

    fn set_pagination(&self, pagination: Option<Pagination>) {
        self.state().pagination = pagination;
    }

    fn set_job_detail(&self, view: JobDetailView) {
        self.state().job_detail = Some(view);
    }

    fn set_title(&self, title: &str) {
        self.state().title = title.to_string();
    }

    fn set_search_value(&self, value: &str) {
        self.state().search_value = value.to_string();
    }

    fn focus_search(&self) {
        self.focus_input(SEARCH_INPUT_ID);
    }

    fn input_focused(&self) -> bool {
        self.state().focused_input.is_some()
    }

    fn navigate(&self, url: &str) {
        self.state().navigations.push(url.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_tracks_which_input() {
        let document = HtmlDocument::new("Bobber");
        assert!(!document.input_focused());

        document.focus_input("newsletter-email");
        assert!(document.input_focused());
        assert!(!document.search_focused());

        document.focus_search();
        assert!(document.search_focused());
    }

    #[test]
    fn test_hide_keeps_content() {
        let document = HtmlDocument::new("Bobber");
        document.show_search_results(SearchDropdown::error());
        document.hide_search_results();

        let state = document.snapshot();
        assert!(!state.search_results_visible);
        assert_eq!(state.search_results, Some(SearchDropdown::error()));
    }

    #[test]
    fn test_to_html_marks_visible_dropdown() {
        let document = HtmlDocument::new("Bobber");
        assert!(document.to_html().contains(r#"class="search-results""#));

        document.show_search_results(SearchDropdown::error());
        let html = document.to_html();
        assert!(html.contains(r#"class="search-results show""#));
        assert!(html.contains("Search failed. Please try again."));
    }

    #[test]
    fn test_cleared_pagination_renders_empty() {
        let document = HtmlDocument::new("Bobber");
        document.set_pagination(Pagination::new(2, 3, 60, 20, ""));
        assert!(!document.pagination_html().is_empty());

        document.set_pagination(None);
        assert_eq!(document.pagination_html(), "");
    }

    #[test]
    fn test_search_value_is_escaped_in_attribute() {
        let document = HtmlDocument::new("Bobber");
        document.set_search_value("\"><script>");
        assert!(document.to_html().contains("value=\"&quot;&gt;&lt;script&gt;\""));
    }
}
