//! PageSense server
//!
//! HTTP service for headless page scraping with sentiment and keyword
//! analytics.

use anyhow::Context;
use clap::Parser;
use pagesense::browser::BrowserConfig;
use pagesense::cors::cors_layer_from_env;
use pagesense::handlers::{create_router, AppState};

/// PageSense scraping and analytics server
#[derive(Parser, Debug)]
#[command(name = "pagesense")]
#[command(version)]
#[command(about = "HTTP service for web scraping with text analytics")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "3001")]
    port: u16,

    /// Host to bind to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Path to Chrome/Chromium executable
    #[arg(long)]
    chrome_path: Option<String>,

    /// Run the browser in headless mode
    #[arg(long, default_value = "true")]
    headless: bool,

    /// Navigation timeout in milliseconds
    #[arg(long, default_value = "30000")]
    nav_timeout_ms: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut browser = BrowserConfig::builder()
        .headless(args.headless)
        .timeout_ms(args.nav_timeout_ms);
    if let Some(path) = args.chrome_path {
        browser = browser.chrome_path(path);
    }

    let state = AppState::new(browser.build());
    let app = create_router(state, cors_layer_from_env());

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!("PageSense server listening on {}", addr);

    axum::serve(listener, app)
        .await
        .context("server error")?;

    Ok(())
}
