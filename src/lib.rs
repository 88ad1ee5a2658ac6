//! siteaudit: audit a static EN/ES site for duplicate images and broken
//! local references.
//!
//! The crate is organized like this:
//! - [`core`]: shared types, errors, constants and the [`Audit`] trait
//! - [`config`]: TOML config, CLI overrides and the resolved [`SiteConfig`]
//! - [`discovery`]: reading manifest pages and extracting references
//! - [`duplicates`]: the [`ImageReferenceScanner`]
//! - [`validation`]: the [`LinkExistenceChecker`]
//! - [`reporting`]: structured logging
//! - [`ui`]: CLI parsing, report rendering and completions

pub mod config;
pub mod core;
pub mod discovery;
pub mod duplicates;
pub mod reporting;
pub mod ui;
pub mod validation;

// Re-export the main entry points
pub use config::{CliConfig, Config, SiteConfig};
pub use core::{Audit, AuditReport, Result, SiteAuditError};
pub use duplicates::{DuplicateReport, ImageReferenceScanner};
pub use validation::{LinkExistenceChecker, LinkFinding, LinkReport};
