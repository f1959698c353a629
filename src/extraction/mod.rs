//! Content extraction module
//!
//! Queries rendered HTML for caller-specified selector tags and collects the
//! per-element strings (text content, or image sources for `img`).

pub mod selectors;

pub use selectors::{ExtractionResult, SelectorExtractor, DEFAULT_ELEMENTS};
