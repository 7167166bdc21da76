//! View models: what each container shows, built from API data without
//! touching the document. `render` turns these into markup.

use chrono::{DateTime, Utc};
use common::{JobDetail, JobSummary, JobsPage};

use crate::format::{format_count, format_date_at, sanitize_description};
use crate::urls::{build_jobs_url, job_url, jobs_page_url};

pub const SEARCH_ERROR_MESSAGE: &str = "Search failed. Please try again.";

/// One entry of the search dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchItem {
    pub title: String,
    pub company: String,
    pub location: String,
    pub href: String,
}

/// The "see all results" action under the dropdown entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeeAll {
    pub query: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchDropdown {
    NoResults { query: String },
    Results { items: Vec<SearchItem>, see_all: SeeAll },
    Error { message: String },
}

impl SearchDropdown {
    /// Entries for `jobs`, capped at `limit`.
    pub fn from_jobs(jobs: &[JobSummary], query: &str, limit: usize) -> Self {
        if jobs.is_empty() {
            return SearchDropdown::NoResults {
                query: query.to_string(),
            };
        }

        let items = jobs
            .iter()
            .take(limit)
            .map(|job| SearchItem {
                title: job.title.clone(),
                company: job.company_name.clone(),
                location: job.location.clone(),
                href: job_url(job.id),
            })
            .collect();

        SearchDropdown::Results {
            items,
            see_all: SeeAll {
                query: query.to_string(),
                href: jobs_page_url(query),
            },
        }
    }

    pub fn error() -> Self {
        SearchDropdown::Error {
            message: SEARCH_ERROR_MESSAGE.to_string(),
        }
    }
}

/// A job in the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobCard {
    pub title: String,
    pub company: String,
    pub location: String,
    /// Relative date, e.g. "3 days ago".
    pub posted: String,
    pub href: String,
}

impl JobCard {
    pub fn new(job: &JobSummary, now: DateTime<Utc>) -> Self {
        Self {
            title: job.title.clone(),
            company: job.company_name.clone(),
            location: job.location.clone(),
            posted: format_date_at(job.first_seen_at.as_deref(), now),
            href: job_url(job.id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobsList {
    Loading,
    Empty,
    Cards(Vec<JobCard>),
    Error(String),
}

impl JobsList {
    pub fn from_jobs(jobs: &[JobSummary], now: DateTime<Utc>) -> Self {
        if jobs.is_empty() {
            JobsList::Empty
        } else {
            JobsList::Cards(jobs.iter().map(|job| JobCard::new(job, now)).collect())
        }
    }
}

/// Title and count shown above the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobsHeader {
    pub title: String,
    pub count: String,
}

impl JobsHeader {
    pub fn new(total: u64, query: &str) -> Self {
        let title = if query.is_empty() {
            "All Jobs".to_string()
        } else {
            format!("Search Results for \"{query}\"")
        };
        Self {
            title,
            count: format!("{} jobs found", format_count(total)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageItem {
    Link { label: String, href: String },
    Current(u32),
    Disabled(String),
    Ellipsis,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub items: Vec<PageItem>,
    /// "Showing 21-40 of 1,234"
    pub summary: String,
}

pub const PREVIOUS_LABEL: &str = "← Previous";
pub const NEXT_LABEL: &str = "Next →";

/// Pages shown on each side of the current page.
const WINDOW: u32 = 2;

impl Pagination {
    /// None when everything fits on a single page.
    pub fn new(page: u32, total_pages: u32, total: u64, page_size: u32, query: &str) -> Option<Self> {
        if total_pages <= 1 {
            return None;
        }

        let link = |label: String, target: u32| PageItem::Link {
            label,
            href: build_jobs_url(query, target, page_size),
        };
        let mut items = Vec::new();

        if page > 1 {
            items.push(link(PREVIOUS_LABEL.to_string(), page - 1));
        } else {
            items.push(PageItem::Disabled(PREVIOUS_LABEL.to_string()));
        }

        let start = page.saturating_sub(WINDOW).max(1);
        let end = page.saturating_add(WINDOW).min(total_pages);

        if start > 1 {
            items.push(link("1".to_string(), 1));
            if start > 2 {
                items.push(PageItem::Ellipsis);
            }
        }

        for n in start..=end {
            if n == page {
                items.push(PageItem::Current(n));
            } else {
                items.push(link(n.to_string(), n));
            }
        }

        if end < total_pages {
            if end < total_pages - 1 {
                items.push(PageItem::Ellipsis);
            }
            items.push(link(total_pages.to_string(), total_pages));
        }

        if page < total_pages {
            items.push(link(NEXT_LABEL.to_string(), page + 1));
        } else {
            items.push(PageItem::Disabled(NEXT_LABEL.to_string()));
        }

        let first = u64::from(page.saturating_sub(1)) * u64::from(page_size) + 1;
        let last = (u64::from(page) * u64::from(page_size)).min(total);
        let summary = format!(
            "Showing {first}-{last} of {}",
            format_count(total)
        );

        Some(Self { items, summary })
    }

    pub fn for_page(data: &JobsPage, query: &str) -> Option<Self> {
        Self::new(data.page, data.total_pages, data.total, data.page_size, query)
    }

    /// Page numbers that have a link or are current, in display order.
    pub fn page_numbers(&self) -> Vec<u32> {
        self.items
            .iter()
            .filter_map(|item| match item {
                PageItem::Current(n) => Some(*n),
                PageItem::Link { label, .. } => label.parse().ok(),
                _ => None,
            })
            .collect()
    }
}

/// Description block of the detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Description {
    /// Sanitized markup, safe to insert as-is.
    Html(String),
    Missing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobDetailView {
    Loaded {
        title: String,
        company: String,
        location: String,
        posted: String,
        description: Description,
    },
    Error(String),
}

impl JobDetailView {
    pub fn new(job: &JobDetail, now: DateTime<Utc>) -> Self {
        let description = match job.description.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => Description::Html(sanitize_description(raw)),
            _ => Description::Missing,
        };

        JobDetailView::Loaded {
            title: job.title.clone(),
            company: job.company_name.clone(),
            location: job.location.clone(),
            posted: format_date_at(job.first_seen_at.as_deref(), now),
            description,
        }
    }
}

/// `"<title> - <company> | <site>"`
pub fn detail_title(job: &JobDetail, site_name: &str) -> String {
    format!("{} - {} | {}", job.title, job.company_name, site_name)
}
