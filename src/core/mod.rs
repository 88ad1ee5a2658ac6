//! Core types and foundational components
//!
//! This module contains the fundamental data types, error handling,
//! and constants used throughout the application.

pub mod audit;
pub mod constants;
pub mod error;
pub mod types;

// Re-export commonly used items for convenience
pub use audit::{Audit, AuditReport};
pub use error::{Result, SiteAuditError};
pub use types::{BrokenLinkRecord, PageFile, ReferenceKind, ResourceReference};
