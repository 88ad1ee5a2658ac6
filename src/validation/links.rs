use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::config::SiteConfig;
use crate::core::audit::{Audit, AuditReport};
use crate::core::constants::labels;
use crate::core::error::Result;
use crate::core::types::{BrokenLinkRecord, PageFile};
use crate::discovery::{AssetMatcher, ExtractionProfile, extract};
use crate::validation::resolver::reference_exists;

/// A problem found while checking the site's links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LinkFinding {
    /// A manifest page is not on disk; nothing else is checked for it
    MissingManifestFile { path: PathBuf },
    /// An internal `src`/`href` value that does not exist
    UnresolvedReference(BrokenLinkRecord),
    /// A known asset is referenced but its `src` does not exist
    KnownAssetRegression {
        asset: String,
        record: BrokenLinkRecord,
    },
    /// The page could not be read or scanned
    PageProcessingError { page: String, message: String },
}

impl fmt::Display for LinkFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkFinding::MissingManifestFile { path } => {
                write!(f, "{} Main file missing: {}", labels::CRITICAL, path.display())
            }
            LinkFinding::UnresolvedReference(record) => write!(
                f,
                "{} In {}: {}",
                labels::BROKEN_LINK,
                record.page,
                record.reference
            ),
            LinkFinding::KnownAssetRegression { asset, record } => write!(
                f,
                "{} {} missing in {}: {}",
                labels::BROKEN_IMAGE,
                asset,
                record.page,
                record.reference
            ),
            LinkFinding::PageProcessingError { page, message } => {
                write!(f, "{} {}: {}", labels::PROCESSING_ERROR, page, message)
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LinkReport {
    /// Pages that were found on disk, in manifest order
    pub checked_pages: Vec<String>,
    /// Findings in the order they were discovered
    pub findings: Vec<LinkFinding>,
}

impl LinkReport {
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}

impl AuditReport for LinkReport {
    fn has_findings(&self) -> bool {
        !self.is_clean()
    }

    fn finding_count(&self) -> usize {
        self.findings.len()
    }
}

/// Checks that every local `src`/`href` in the manifest resolves on disk.
///
/// Each configured known asset additionally gets its own guard: when a page
/// mentions the asset, the first `src` naming it is re-checked and reported
/// under its own label.
pub struct LinkExistenceChecker<'a> {
    site: &'a SiteConfig,
    guards: Vec<AssetMatcher>,
}

impl<'a> LinkExistenceChecker<'a> {
    pub fn new(site: &'a SiteConfig) -> Result<Self> {
        let guards = site
            .known_assets()
            .iter()
            .map(|asset| AssetMatcher::new(asset))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { site, guards })
    }

    /// Check one page that is known to exist.
    pub fn check_page(&self, page: &PageFile) -> std::io::Result<Vec<LinkFinding>> {
        let content = fs::read_to_string(page.absolute())?;
        let mut findings = Vec::new();

        for reference in extract(&content, ExtractionProfile::Links) {
            if !reference_exists(self.site.root_dir(), page, reference.raw()) {
                findings.push(LinkFinding::UnresolvedReference(BrokenLinkRecord::new(
                    page,
                    reference.raw(),
                )));
            }
        }

        findings.extend(self.check_known_assets(page, &content));
        Ok(findings)
    }

    fn check_known_assets(&self, page: &PageFile, content: &str) -> Vec<LinkFinding> {
        self.guards
            .iter()
            .filter(|guard| guard.is_mentioned(content))
            .filter_map(|guard| {
                let src = guard.find_src(content)?;
                if reference_exists(self.site.root_dir(), page, src) {
                    return None;
                }
                Some(LinkFinding::KnownAssetRegression {
                    asset: guard.asset().to_string(),
                    record: BrokenLinkRecord::new(page, src),
                })
            })
            .collect()
    }
}

impl Audit for LinkExistenceChecker<'_> {
    type Report = LinkReport;

    fn run(&self) -> Result<LinkReport> {
        let mut report = LinkReport::default();

        for page in self.site.pages() {
            if !page.absolute().exists() {
                report.findings.push(LinkFinding::MissingManifestFile {
                    path: page.absolute().to_path_buf(),
                });
                continue;
            }

            report.checked_pages.push(page.relative().to_string());

            match self.check_page(page) {
                Ok(findings) => report.findings.extend(findings),
                Err(e) => {
                    log::warn!("Could not process {}: {e}", page.relative());
                    report.findings.push(LinkFinding::PageProcessingError {
                        page: page.relative().to_string(),
                        message: e.to_string(),
                    });
                }
            }
        }

        Ok(report)
    }
}
