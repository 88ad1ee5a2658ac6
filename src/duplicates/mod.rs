//! Duplicate image detection
//!
//! This module tallies image usage across the manifest and within
//! each page.

pub mod scanner;
pub mod usage;

// Re-export commonly used items
pub use scanner::{CrossPageDuplicate, DuplicateReport, ImageReferenceScanner, PageDuplicates};
pub use usage::UsageIndex;
