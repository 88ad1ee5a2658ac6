//! Local link validation
//!
//! This module resolves `src`/`href` references against the
//! filesystem and reports the ones that do not exist.

pub mod links;
pub mod resolver;

// Re-export commonly used items
pub use links::{LinkExistenceChecker, LinkFinding, LinkReport};
pub use resolver::{Resolution, reference_exists, resolve};
