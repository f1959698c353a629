//! HTTP handlers for the PageSense server.
//!
//! One scrape endpoint plus a health probe; routing and shared state live in
//! [`scrape`].

pub mod scrape;

pub use scrape::{create_router, AppState, ScrapeRequest, DEFAULT_REQUEST_TIMEOUT_SECS};
