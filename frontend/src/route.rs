//! Page classification for the displayed site.
//!
//! The site has three page types plus a catch-all. Which controller runs on
//! page load is decided here, from the path alone.

use regex::Regex;
use thiserror::Error;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// `/`
    Home,
    /// `/jobs`, the paginated listing.
    Jobs,
    /// Anything under `/jobs/`.
    JobDetail,
    Unknown,
}

impl PageKind {
    pub fn classify(path: &str) -> Self {
        if path == "/" {
            PageKind::Home
        } else if path == "/jobs" {
            PageKind::Jobs
        } else if path.starts_with("/jobs/") {
            PageKind::JobDetail
        } else {
            PageKind::Unknown
        }
    }
}

/// Extracts the numeric id from a `/jobs/<id>` path.
/// Returns None when the path carries no digits after `/jobs/`.
pub fn job_id_from_path(path: &str) -> Option<u64> {
    let re = Regex::new(r"/jobs/(\d+)").ok()?;
    let caps = re.captures(path)?;
    caps.get(1)?.as_str().parse().ok()
}

#[derive(Debug, Error)]
pub enum UrlError {
    #[error("page url must start with '/' or be absolute: {0:?}")]
    NotAPath(String),
    #[error(transparent)]
    Parse(#[from] url::ParseError),
}

/// The URL of the page currently displayed: its path and decoded query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageUrl {
    path: String,
    query: Vec<(String, String)>,
}

impl PageUrl {
    /// Accepts either a site-relative URL (`/jobs?q=rust`) or an absolute one.
    pub fn parse(input: &str) -> Result<Self, UrlError> {
        if input.starts_with("http://") || input.starts_with("https://") {
            let url = Url::parse(input)?;
            let query = url.query_pairs().into_owned().collect();
            return Ok(Self {
                path: url.path().to_string(),
                query,
            });
        }

        if !input.starts_with('/') {
            return Err(UrlError::NotAPath(input.to_string()));
        }

        let without_fragment = input.split('#').next().unwrap_or_default();
        let (path, raw_query) = match without_fragment.split_once('?') {
            Some((path, query)) => (path, query),
            None => (without_fragment, ""),
        };
        let query = url::form_urlencoded::parse(raw_query.as_bytes())
            .into_owned()
            .collect();

        Ok(Self {
            path: path.to_string(),
            query,
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn kind(&self) -> PageKind {
        PageKind::classify(&self.path)
    }

    /// First value for `name`, like `URLSearchParams.get`.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }
}
