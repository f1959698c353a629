//! CORS (Cross-Origin Resource Sharing) configuration for the PageSense server.
//!
//! Cross-origin access is governed by an externally configured allow-list
//! (the `PAGESENSE_ALLOWED_ORIGINS` environment variable, comma-separated).
//! When no allow-list is configured the policy falls back to localhost-only,
//! which is the right posture for local development.
//!
//! # Example
//!
//! ```rust,ignore
//! use pagesense::cors::cors_layer_from_env;
//! use axum::Router;
//!
//! let app = Router::new().layer(cors_layer_from_env());
//! ```

use http::{header::HeaderValue, Method};
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Environment variable holding the comma-separated origin allow-list
pub const ALLOWED_ORIGINS_ENV: &str = "PAGESENSE_ALLOWED_ORIGINS";

/// Standard allowed headers
pub const ALLOWED_HEADERS: [http::header::HeaderName; 2] =
    [http::header::CONTENT_TYPE, http::header::AUTHORIZATION];

/// Standard allowed methods
pub const ALLOWED_METHODS: [Method; 3] = [Method::GET, Method::POST, Method::OPTIONS];

/// Default max age for preflight cache (1 hour)
pub const DEFAULT_MAX_AGE_SECS: u64 = 3600;

/// Creates a CORS layer from the environment allow-list.
///
/// Falls back to [`cors_layer`] (localhost-only) when the variable is unset
/// or empty.
pub fn cors_layer_from_env() -> CorsLayer {
    let origins: Vec<String> = std::env::var(ALLOWED_ORIGINS_ENV)
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    if origins.is_empty() {
        cors_layer()
    } else {
        cors_layer_with_origins(origins)
    }
}

/// Creates a strict CORS layer that only allows localhost origins.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(|origin, _| {
            is_localhost_origin(origin)
        }))
        .allow_methods(ALLOWED_METHODS)
        .allow_headers(ALLOWED_HEADERS)
        .max_age(Duration::from_secs(DEFAULT_MAX_AGE_SECS))
}

/// Creates a CORS layer allowing exactly the given origins.
///
/// Origin matching is exact (scheme, host, and port all compared verbatim
/// against the allow-list).
pub fn cors_layer_with_origins(origins: Vec<String>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(move |origin, _| {
            origin
                .to_str()
                .map(|o| origins.iter().any(|allowed| allowed == o))
                .unwrap_or(false)
        }))
        .allow_methods(ALLOWED_METHODS)
        .allow_headers(ALLOWED_HEADERS)
        .max_age(Duration::from_secs(DEFAULT_MAX_AGE_SECS))
}

/// Checks if the given origin is a localhost origin.
///
/// Accepts `http(s)://localhost`, `http(s)://127.0.0.1`, and
/// `http(s)://[::1]`, each with an optional port. Everything else, including
/// other private IP ranges and look-alike hosts such as
/// `localhostevil.com`, is rejected.
pub fn is_localhost_origin(origin: &HeaderValue) -> bool {
    let origin_str = match origin.to_str() {
        Ok(s) => s,
        Err(_) => return false,
    };

    let lower = origin_str.to_lowercase();
    let rest = if let Some(r) = lower.strip_prefix("https://") {
        r
    } else if let Some(r) = lower.strip_prefix("http://") {
        r
    } else {
        return false;
    };

    for host in ["localhost", "127.0.0.1", "[::1]"] {
        if let Some(after) = rest.strip_prefix(host) {
            if after.is_empty() {
                return true;
            }
            // A port must be numeric and non-zero; anything else after the
            // host means a different hostname
            if let Some(port) = after.strip_prefix(':') {
                return port.parse::<u16>().map(|p| p > 0).unwrap_or(false);
            }
            return false;
        }
    }

    false
}
