//! Page navigation functionality
//!
//! This module handles URL validation and single-attempt navigation with a
//! network-quiescence wait. A failed navigation is terminal for the request;
//! there is no retry loop.

use crate::error::{Error, NavigationError, Result};
use chromiumoxide::Page;
use std::time::Duration;
use tracing::{debug, info, instrument};
use url::Url;

/// Options for page navigation
#[derive(Debug, Clone)]
pub struct NavigationOptions {
    /// Timeout in milliseconds (default: 30000)
    pub timeout_ms: u64,
    /// Wait until condition (default: networkidle2)
    pub wait_until: WaitUntil,
}

impl Default for NavigationOptions {
    fn default() -> Self {
        Self {
            timeout_ms: 30000,
            wait_until: WaitUntil::NetworkIdle2,
        }
    }
}

/// Condition to wait for after navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitUntil {
    /// Wait until load event fires
    Load,
    /// Wait until DOMContentLoaded event fires
    DomContentLoaded,
    /// Wait until network is idle (max 2 in-flight connections for a
    /// stabilization window)
    NetworkIdle2,
}

/// How long the page must stay quiet after load before we call it settled
const NETWORK_IDLE_SETTLE_MS: u64 = 500;

/// Validate a URL for navigation: must parse as an absolute http(s) URL.
pub fn validate_url(url: &str) -> Result<Url> {
    if url.is_empty() {
        return Err(NavigationError::InvalidUrl("URL is required".to_string()).into());
    }

    let parsed = Url::parse(url)
        .map_err(|e| NavigationError::InvalidUrl(format!("{}: {}", url, e)))?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(NavigationError::InvalidUrl(format!(
            "unsupported scheme '{}': {}",
            other, url
        ))
        .into()),
    }
}

/// Page navigator: goto with a readiness wait
pub struct PageNavigator;

impl PageNavigator {
    /// Navigate to a URL and wait for the configured readiness condition.
    ///
    /// Single attempt: any failure (bad URL, unreachable host, timeout)
    /// propagates immediately to the caller.
    #[instrument(skip(page))]
    pub async fn goto(page: &Page, url: &str, options: Option<NavigationOptions>) -> Result<()> {
        let opts = options.unwrap_or_default();
        validate_url(url)?;

        info!("Navigating to: {}", url);

        let timeout = Duration::from_millis(opts.timeout_ms);
        let nav_future = page.goto(url);
        tokio::time::timeout(timeout, nav_future)
            .await
            .map_err(|_| NavigationError::Timeout(opts.timeout_ms))?
            .map_err(|e| NavigationError::LoadFailed(e.to_string()))?;

        Self::wait_for_ready(page, &opts).await?;

        debug!("Navigation complete: {}", url);
        Ok(())
    }

    /// Wait for the page to satisfy the wait_until condition
    async fn wait_for_ready(page: &Page, opts: &NavigationOptions) -> Result<()> {
        let script = match opts.wait_until {
            WaitUntil::Load => {
                r#"
                    new Promise(resolve => {
                        if (document.readyState === 'complete') {
                            resolve(true);
                        } else {
                            window.addEventListener('load', () => resolve(true));
                        }
                    })
                "#
                .to_string()
            }
            WaitUntil::DomContentLoaded => {
                r#"
                    new Promise(resolve => {
                        if (document.readyState !== 'loading') {
                            resolve(true);
                        } else {
                            document.addEventListener('DOMContentLoaded', () => resolve(true));
                        }
                    })
                "#
                .to_string()
            }
            WaitUntil::NetworkIdle2 => {
                // Approximates networkidle2: a settle window after the load
                // event, long enough for straggling fetches to land in the DOM
                format!(
                    r#"
                    new Promise(resolve => {{
                        if (document.readyState === 'complete') {{
                            setTimeout(() => resolve(true), {settle});
                        }} else {{
                            window.addEventListener('load', () => {{
                                setTimeout(() => resolve(true), {settle});
                            }});
                        }}
                    }})
                "#,
                    settle = NETWORK_IDLE_SETTLE_MS
                )
            }
        };

        let timeout = Duration::from_millis(opts.timeout_ms);
        tokio::time::timeout(timeout, page.evaluate(script.as_str()))
            .await
            .map_err(|_| NavigationError::Timeout(opts.timeout_ms))?
            .map_err(|e| Error::cdp(e.to_string()))?;

        Ok(())
    }
}
