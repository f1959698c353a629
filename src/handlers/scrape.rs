//! Scrape endpoint: render, extract, validate, analyze, respond.
//!
//! # Architecture
//!
//! ```text
//! POST /api/scrape ──> scrape_handler ──> PageRenderer (ephemeral browser)
//!                            │                    │
//!                            │                    ▼
//!                            │            rendered HTML
//!                            │                    │
//!                            ▼                    ▼
//!                     end-to-end timeout   SelectorExtractor
//!                                                 │
//!                                   completeness check (all-or-nothing)
//!                                                 │
//!                                          TextAnalyzer
//!                                                 │
//!                                                 ▼
//!                              flat JSON: tag arrays + sentiment,
//!                              wordCount, keywords
//! ```
//!
//! Any stage failure short-circuits to a 400 `{"error": ...}`; nothing is
//! cached between requests.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Json, State};
use axum::routing::{get, post};
use axum::Router;
use serde::Deserialize;
use serde_json::{json, Map, Value};
use tower_http::cors::CorsLayer;
use tracing::{info, instrument};

use crate::analysis::TextAnalyzer;
use crate::browser::{BrowserConfig, PageRenderer};
use crate::error::{Error, Result};
use crate::extraction::{ExtractionResult, SelectorExtractor, DEFAULT_ELEMENTS};

/// Default ceiling for one whole request, rendering included
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

/// Scrape request body
#[derive(Debug, Clone, Deserialize)]
pub struct ScrapeRequest {
    /// Absolute http(s) URL of the page to scrape.
    ///
    /// Optional at the serde level so a body without it still reaches the
    /// pipeline and fails URL validation with a 400 JSON error, instead of
    /// being bounced by the extractor with a plain-text rejection.
    #[serde(default)]
    pub url: Option<String>,
    /// Selector tags to extract; defaults to `h3` and `p` when omitted
    #[serde(default)]
    pub elements: Option<Vec<String>>,
}

impl ScrapeRequest {
    /// The requested URL, empty when the field was omitted.
    ///
    /// URL validation treats the empty string as "URL is required", so a
    /// missing field reports the same way an empty one does.
    pub fn url_or_empty(&self) -> &str {
        self.url.as_deref().unwrap_or("")
    }

    /// The requested tags, falling back to the default set
    pub fn elements_or_default(&self) -> Vec<String> {
        match &self.elements {
            Some(tags) => tags.clone(),
            None => DEFAULT_ELEMENTS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Shared per-process state.
///
/// The analyzer is immutable and stateless per call; the browser config is a
/// template from which each request launches its own browser.
#[derive(Clone)]
pub struct AppState {
    /// Lexicon analyzer, built once at startup
    pub analyzer: Arc<TextAnalyzer>,
    /// Template for per-request browser launches
    pub browser: BrowserConfig,
    /// End-to-end request deadline in seconds
    pub request_timeout_secs: u64,
}

impl AppState {
    /// Build state with the given browser config and default timeout
    pub fn new(browser: BrowserConfig) -> Self {
        Self {
            analyzer: Arc::new(TextAnalyzer::new()),
            browser,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

/// Build the application router with the scrape and health routes
pub fn create_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/api/scrape", post(scrape_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .with_state(state)
}

/// Liveness probe for systemd/load balancers
async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

/// Handle one scrape request under the end-to-end deadline
#[instrument(skip(state, req), fields(url = ?req.url))]
async fn scrape_handler(
    State(state): State<AppState>,
    Json(req): Json<ScrapeRequest>,
) -> Result<Json<Value>> {
    info!("Scraping {} for {:?}", req.url_or_empty(), req.elements);

    let deadline = Duration::from_secs(state.request_timeout_secs);
    let result = tokio::time::timeout(deadline, process_scrape(&state, &req))
        .await
        .map_err(|_| Error::RequestTimeout(state.request_timeout_secs))??;

    Ok(Json(result))
}

/// The full pipeline for one request: render then process
async fn process_scrape(state: &AppState, req: &ScrapeRequest) -> Result<Value> {
    let elements = req.elements_or_default();
    let html = PageRenderer::render(&state.browser, req.url_or_empty()).await?;
    process_document(&html, &elements, &state.analyzer)
}

/// Extract, validate, analyze, and assemble over already-rendered HTML.
///
/// This is the browser-free half of the pipeline; tests drive it with static
/// markup in place of a live render.
pub fn process_document(
    html: &str,
    elements: &[String],
    analyzer: &TextAnalyzer,
) -> Result<Value> {
    let extraction = SelectorExtractor::extract(html, elements)?;

    // All-or-nothing: one empty tag fails the request before any analytics run
    let empty = extraction.empty_tags();
    if !empty.is_empty() {
        return Err(Error::content_not_found(empty));
    }

    let analytics = analyzer.analyze(&extraction.joined_text());

    assemble_response(&extraction, &analytics)
}

/// Merge extraction entries and analytics into one flat JSON object.
///
/// Tag keys come first in request order, then `sentiment`, `wordCount`, and
/// `keywords` (serde_json's preserve_order feature keeps insertion order).
fn assemble_response(
    extraction: &ExtractionResult,
    analytics: &crate::analysis::TextAnalytics,
) -> Result<Value> {
    let mut body = Map::new();
    for (tag, values) in extraction.iter() {
        body.insert(tag.to_string(), json!(values));
    }
    body.insert("sentiment".to_string(), serde_json::to_value(analytics.sentiment)?);
    body.insert("wordCount".to_string(), json!(analytics.word_count));
    body.insert("keywords".to_string(), json!(analytics.keywords));

    Ok(Value::Object(body))
}
