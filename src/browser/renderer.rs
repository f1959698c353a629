//! Full-page HTML rendering
//!
//! The renderer owns the scoped browser lifecycle for one request: launch an
//! ephemeral browser, navigate, serialize the post-JavaScript DOM, and close
//! the browser on every exit path. The navigate/capture outcome is held while
//! the browser shuts down, and the first error wins.

use crate::browser::controller::{BrowserConfig, BrowserController};
use crate::browser::navigation::{NavigationOptions, PageNavigator, WaitUntil};
use crate::error::{Error, Result};
use chromiumoxide::Page;
use tracing::{debug, instrument, warn};

/// Renders URLs to fully loaded HTML using an ephemeral browser per call
pub struct PageRenderer;

impl PageRenderer {
    /// Render the page at `url` and return its serialized DOM.
    ///
    /// The browser launched for this call is always closed before returning,
    /// whether navigation and capture succeed or fail.
    #[instrument(skip(config))]
    pub async fn render(config: &BrowserConfig, url: &str) -> Result<String> {
        // Validate before paying for a browser launch
        crate::browser::navigation::validate_url(url)?;

        let controller = BrowserController::with_config(config).await?;
        let outcome = Self::render_on(&controller, config, url).await;

        // Guaranteed release: close runs on success and failure alike
        if let Err(e) = controller.close().await {
            warn!("Browser close failed after render: {}", e);
        }

        outcome
    }

    async fn render_on(
        controller: &BrowserController,
        config: &BrowserConfig,
        url: &str,
    ) -> Result<String> {
        let page = controller.new_page().await?;

        let options = NavigationOptions {
            timeout_ms: config.timeout_ms,
            wait_until: WaitUntil::NetworkIdle2,
        };
        PageNavigator::goto(&page, url, Some(options)).await?;

        let html = Self::capture_html(&page).await?;
        debug!("Rendered {} bytes of HTML from {}", html.len(), url);

        Ok(html)
    }

    /// Serialize the current DOM, including script-generated content
    async fn capture_html(page: &Page) -> Result<String> {
        page.content()
            .await
            .map_err(|e| Error::cdp(e.to_string()))
    }
}
