//! PageSense - Web Page Scraping & Text Analytics Service
//!
//! This crate provides an HTTP service that renders web pages in a headless
//! browser, extracts text by caller-specified selector tags, and derives
//! simple text analytics: sentiment polarity, word count, and top keywords.
//!
//! # Features
//!
//! - **Headless Rendering**: Post-JavaScript page HTML via ChromiumOxide (CDP)
//! - **Selector Extraction**: Per-tag text (or image source) collection
//! - **Text Analytics**: AFINN lexicon sentiment, word count, frequency-ranked
//!   keywords with English stop-word filtering
//! - **HTTP API**: A single `POST /api/scrape` endpoint plus a health probe
//!
//! # Architecture
//!
//! ```text
//! HTTP Client ──▶ Axum Router ──▶ Scrape Handler
//!                                       │
//!                      ┌────────────────┼─────────────────┐
//!                      ▼                ▼                 ▼
//!               PageRenderer    SelectorExtractor    TextAnalyzer
//!               (ephemeral      (scraper over        (sentiment,
//!                browser)        rendered HTML)       keywords)
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use pagesense::analysis::TextAnalyzer;
//! use pagesense::browser::{BrowserConfig, PageRenderer};
//! use pagesense::extraction::SelectorExtractor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = BrowserConfig::default();
//!     let html = PageRenderer::render(&config, "https://example.com").await?;
//!
//!     let tags = vec!["h3".to_string(), "p".to_string()];
//!     let extraction = SelectorExtractor::extract(&html, &tags)?;
//!
//!     let analyzer = TextAnalyzer::new();
//!     let analytics = analyzer.analyze(&extraction.joined_text());
//!
//!     println!("Sentiment: {:?}", analytics.sentiment);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod analysis;
pub mod browser;
pub mod cors;
pub mod error;
pub mod extraction;
pub mod handlers;

// Re-exports for convenience
pub use analysis::{SentimentLabel, TextAnalytics, TextAnalyzer};
pub use browser::{BrowserConfig, BrowserController, PageRenderer};
pub use error::{Error, Result};
pub use extraction::{ExtractionResult, SelectorExtractor};
pub use handlers::{create_router, AppState, ScrapeRequest};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
