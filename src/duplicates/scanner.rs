use rustc_hash::FxHashSet;
use serde::Serialize;
use std::collections::BTreeSet;

use crate::config::SiteConfig;
use crate::core::audit::{Audit, AuditReport};
use crate::core::error::Result;
use crate::core::types::PageFile;
use crate::discovery::{ExtractionProfile, extract, read_page};
use crate::duplicates::usage::UsageIndex;

/// An image used more than once across the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrossPageDuplicate {
    pub filename: String,
    /// One entry per occurrence; a page repeats if it uses the image twice
    pub pages: Vec<String>,
}

impl CrossPageDuplicate {
    pub fn count(&self) -> usize {
        self.pages.len()
    }
}

/// Images referenced more than once within a single page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageDuplicates {
    pub page: String,
    /// Sorted, each filename once
    pub filenames: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DuplicateReport {
    pub cross_page: Vec<CrossPageDuplicate>,
    pub per_page: Vec<PageDuplicates>,
}

impl DuplicateReport {
    /// Per-page duplicates for `page`, if it has any.
    pub fn for_page(&self, page: &str) -> Option<&PageDuplicates> {
        self.per_page.iter().find(|entry| entry.page == page)
    }

    /// Cross-page entry for `filename`, if it is duplicated.
    pub fn for_image(&self, filename: &str) -> Option<&CrossPageDuplicate> {
        self.cross_page
            .iter()
            .find(|entry| entry.filename == filename)
    }
}

impl AuditReport for DuplicateReport {
    fn has_findings(&self) -> bool {
        !self.cross_page.is_empty() || !self.per_page.is_empty()
    }

    fn finding_count(&self) -> usize {
        self.cross_page.len() + self.per_page.len()
    }
}

/// Finds images that are used more than once, across pages and within a page.
///
/// Pages missing from disk contribute nothing. A page that exists but cannot
/// be read fails the whole scan.
pub struct ImageReferenceScanner<'a> {
    site: &'a SiteConfig,
}

impl<'a> ImageReferenceScanner<'a> {
    pub fn new(site: &'a SiteConfig) -> Self {
        Self { site }
    }

    fn record_usage(&self, page: &PageFile, content: &str, index: &mut UsageIndex) {
        let references = extract(content, ExtractionProfile::ImageUsage);
        log::debug!(
            "{}: {} image reference(s)",
            page.relative(),
            references.len()
        );

        for reference in &references {
            if self.site.is_ignored(reference.filename()) {
                continue;
            }
            index.record(reference.filename(), page.relative());
        }
    }

    /// Image filenames that occur more than once in `content`.
    pub fn page_duplicates(&self, content: &str) -> BTreeSet<String> {
        let mut seen = FxHashSet::default();
        let mut dupes = BTreeSet::new();

        for reference in extract(content, ExtractionProfile::ImageOccurrence) {
            let filename = reference.filename();
            if self.site.is_ignored(filename) {
                continue;
            }
            if !seen.insert(filename.to_string()) {
                dupes.insert(filename.to_string());
            }
        }

        dupes
    }
}

impl Audit for ImageReferenceScanner<'_> {
    type Report = DuplicateReport;

    fn run(&self) -> Result<DuplicateReport> {
        let mut index = UsageIndex::new();
        let mut per_page = Vec::new();

        for page in self.site.pages() {
            let Some(content) = read_page(page)? else {
                continue;
            };

            self.record_usage(page, &content, &mut index);

            let dupes = self.page_duplicates(&content);
            if !dupes.is_empty() {
                per_page.push(PageDuplicates {
                    page: page.relative().to_string(),
                    filenames: dupes.into_iter().collect(),
                });
            }
        }

        let cross_page = index
            .duplicates()
            .map(|(filename, pages)| CrossPageDuplicate {
                filename: filename.to_string(),
                pages: pages.to_vec(),
            })
            .collect();

        Ok(DuplicateReport {
            cross_page,
            per_page,
        })
    }
}
