//! Links into the displayed site and parsing of the listing page's query.

use crate::config::DEFAULT_PAGE_SIZE;
use crate::route::PageUrl;

/// `/jobs` with `q`, `page` and `page_size` attached only when they differ
/// from the defaults.
pub fn build_jobs_url(query: &str, page: u32, page_size: u32) -> String {
    let mut params = url::form_urlencoded::Serializer::new(String::new());
    if !query.is_empty() {
        params.append_pair("q", query);
    }
    if page > 1 {
        params.append_pair("page", &page.to_string());
    }
    if page_size != DEFAULT_PAGE_SIZE {
        params.append_pair("page_size", &page_size.to_string());
    }

    let params = params.finish();
    if params.is_empty() {
        "/jobs".to_string()
    } else {
        format!("/jobs?{params}")
    }
}

/// First page of the listing, optionally filtered by `query`.
pub fn jobs_page_url(query: &str) -> String {
    build_jobs_url(query, 1, DEFAULT_PAGE_SIZE)
}

pub fn job_url(id: u64) -> String {
    format!("/jobs/{id}")
}

/// Query, page and page size requested by the listing page's URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingParams {
    pub query: String,
    pub page: u32,
    pub page_size: u32,
}

impl Default for ListingParams {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ListingParams {
    pub fn from_url(url: &PageUrl) -> Self {
        let defaults = Self::default();
        Self {
            query: url.query_param("q").unwrap_or_default().to_string(),
            page: url
                .query_param("page")
                .and_then(parse_leading_number)
                .unwrap_or(defaults.page),
            page_size: url
                .query_param("page_size")
                .and_then(parse_leading_number)
                .unwrap_or(defaults.page_size),
        }
    }
}

/// Leading decimal digits of `raw` (after whitespace). Zero, missing digits
/// and overflow all yield None so callers fall back to their default.
fn parse_leading_number(raw: &str) -> Option<u32> {
    let trimmed = raw.trim_start();
    let trimmed = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    match trimmed[..end].parse::<u32>() {
        Ok(0) | Err(_) => None,
        Ok(n) => Some(n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_jobs_url_omits_defaults() {
        assert_eq!(build_jobs_url("", 1, 20), "/jobs");
        assert_eq!(build_jobs_url("x", 1, 20), "/jobs?q=x");
    }

    #[test]
    fn test_build_jobs_url_with_page() {
        assert_eq!(build_jobs_url("x", 3, 20), "/jobs?q=x&page=3");
        assert_eq!(build_jobs_url("", 2, 50), "/jobs?page=2&page_size=50");
        assert_eq!(build_jobs_url("", 1, 10), "/jobs?page_size=10");
    }

    #[test]
    fn test_build_jobs_url_encodes_query() {
        assert_eq!(
            build_jobs_url("c++ & rust", 1, 20),
            "/jobs?q=c%2B%2B+%26+rust"
        );
    }

    #[test]
    fn test_job_url() {
        assert_eq!(job_url(12), "/jobs/12");
    }

    #[test]
    fn test_listing_params_defaults() {
        let url = PageUrl::parse("/jobs").unwrap();
        assert_eq!(ListingParams::from_url(&url), ListingParams::default());
    }

    #[test]
    fn test_listing_params_from_query() {
        let url = PageUrl::parse("/jobs?q=rust&page=4&page_size=50").unwrap();
        let params = ListingParams::from_url(&url);
        assert_eq!(params.query, "rust");
        assert_eq!(params.page, 4);
        assert_eq!(params.page_size, 50);
    }

    #[test]
    fn test_listing_params_lenient_numbers() {
        let url = PageUrl::parse("/jobs?page=3abc&page_size=zero").unwrap();
        let params = ListingParams::from_url(&url);
        assert_eq!(params.page, 3);
        assert_eq!(params.page_size, 20);

        let url = PageUrl::parse("/jobs?page=0&page_size=-5").unwrap();
        let params = ListingParams::from_url(&url);
        assert_eq!(params.page, 1);
        assert_eq!(params.page_size, 20);
    }

    #[test]
    fn test_built_url_parses_back() {
        let built = build_jobs_url("data engineer", 2, 20);
        let params = ListingParams::from_url(&PageUrl::parse(&built).unwrap());
        assert_eq!(params.query, "data engineer");
        assert_eq!(params.page, 2);
    }
}
