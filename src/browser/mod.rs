//! Browser automation module
//!
//! Headless browser control via ChromiumOxide (CDP): lifecycle management,
//! navigation with a network-idle wait, and full-page HTML rendering.

pub mod controller;
pub mod navigation;
pub mod renderer;

pub use controller::{BrowserConfig, BrowserConfigBuilder, BrowserController};
pub use navigation::{NavigationOptions, PageNavigator, WaitUntil};
pub use renderer::PageRenderer;
