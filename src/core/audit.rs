use serde::Serialize;

use crate::core::error::Result;

/// A single pass over the site manifest that produces a report.
pub trait Audit {
    type Report: AuditReport;

    fn run(&self) -> Result<Self::Report>;
}

/// What every audit report can tell the caller.
pub trait AuditReport: Serialize {
    /// Whether anything worth reporting was found.
    fn has_findings(&self) -> bool;

    /// Number of individual findings, for logging.
    fn finding_count(&self) -> usize;
}
