//! Page controllers for the Bobber job board.
//!
//! The router picks a controller from the page path; controllers fetch from
//! the JSON API, build view models and hand them to a [`Document`].

pub mod api;
pub mod app;
pub mod config;
pub mod detail;
pub mod document;
pub mod format;
pub mod listing;
pub mod render;
pub mod route;
pub mod search;
pub mod urls;
pub mod view;

#[cfg(test)]
mod testing;

pub use api::{ApiError, HttpJobsApi, JobsApi};
pub use app::App;
pub use config::Config;
pub use document::{Document, HtmlDocument};
pub use route::{PageKind, PageUrl};
