//! Reference discovery and page loading
//!
//! This module reads manifest pages and pulls resource references
//! out of their markup.

pub mod extractor;
pub mod manifest;

// Re-export commonly used items
pub use extractor::{AssetMatcher, ExtractionProfile, extract};
pub use manifest::read_page;
