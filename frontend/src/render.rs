//! Markup for the view models, using the site stylesheet's class names.
//!
//! Every piece of text goes through maud's escaping. The only pre-escaped
//! input is a description that has already been sanitized.

use maud::{Markup, PreEscaped, Render, html};

use crate::view::{
    Description, JobCard, JobDetailView, JobsHeader, JobsList, PageItem, Pagination,
    SearchDropdown,
};

impl Render for SearchDropdown {
    fn render(&self) -> Markup {
        match self {
            SearchDropdown::NoResults { query } => html! {
                div class="search-result-item empty" {
                    "No jobs found for \"" (query) "\""
                }
            },
            SearchDropdown::Results { items, see_all } => html! {
                @for item in items {
                    a class="search-result-item" href=(item.href) {
                        div class="search-result-title" { (item.title) }
                        div class="search-result-meta" {
                            (item.company) " | " (item.location)
                        }
                    }
                }
                a class="see-all-btn" href=(see_all.href) {
                    "See all results for \"" (see_all.query) "\""
                }
            },
            SearchDropdown::Error { message } => html! {
                div class="search-result-item error" { (message) }
            },
        }
    }
}

impl Render for JobCard {
    fn render(&self) -> Markup {
        html! {
            a class="job-card" href=(self.href) {
                h3 class="job-title" { (self.title) }
                div class="job-meta" {
                    span class="job-company" { (self.company) }
                    span class="job-location" { (self.location) }
                }
                div class="job-date" { "Posted " (self.posted) }
            }
        }
    }
}

impl Render for JobsList {
    fn render(&self) -> Markup {
        match self {
            JobsList::Loading => html! {
                div class="loading" { "Loading jobs..." }
            },
            JobsList::Empty => html! {
                div class="error" {
                    h3 { "No jobs found" }
                    p { "Try adjusting your search criteria or check back later." }
                }
            },
            JobsList::Cards(cards) => html! {
                @for card in cards { (card) }
            },
            JobsList::Error(message) => html! {
                div class="error" { (message) }
            },
        }
    }
}

impl Render for JobsHeader {
    fn render(&self) -> Markup {
        html! {
            h1 id="jobs-title" { (self.title) }
            p id="jobs-count" { (self.count) }
        }
    }
}

impl Render for PageItem {
    fn render(&self) -> Markup {
        match self {
            PageItem::Link { label, href } => html! {
                a class="pagination-btn" href=(href) { (label) }
            },
            PageItem::Current(n) => html! {
                span class="pagination-btn active" { (n) }
            },
            PageItem::Disabled(label) => html! {
                span class="pagination-btn disabled" { (label) }
            },
            PageItem::Ellipsis => html! {
                span class="pagination-info" { "..." }
            },
        }
    }
}

impl Render for Pagination {
    fn render(&self) -> Markup {
        html! {
            @for item in &self.items { (item) }
            div class="pagination-info" { (self.summary) }
        }
    }
}

impl Render for JobDetailView {
    fn render(&self) -> Markup {
        match self {
            JobDetailView::Loaded {
                title,
                company,
                location,
                posted,
                description,
            } => html! {
                div class="job-detail-header" {
                    h1 class="job-detail-title" { (title) }
                    div class="job-detail-meta" {
                        span class="job-detail-company" { (company) }
                        span class="job-detail-location" { (location) }
                    }
                    div class="job-detail-date" { "Posted " (posted) }
                }
                div class="job-description" {
                    @match description {
                        Description::Html(markup) => (PreEscaped(markup.as_str())),
                        Description::Missing => p { "No description available." },
                    }
                }
            },
            JobDetailView::Error(message) => html! {
                div class="error" { (message) }
            },
        }
    }
}
