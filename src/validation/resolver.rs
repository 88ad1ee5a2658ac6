use std::path::{Path, PathBuf};

use crate::core::constants::references::EXTERNAL_PREFIXES;
use crate::core::types::{PageFile, strip_query_and_fragment};

/// How a reference found in a page should be treated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Never checked: remote URLs, anchors, `mailto:`, `tel:`, `javascript:`
    External,
    /// Must exist at this path
    Local(PathBuf),
}

/// Decide where `reference`, found in `page`, points on disk.
///
/// `/`-prefixed references resolve against `root`; everything else resolves
/// against the page's own directory. Query strings and fragments are dropped.
pub fn resolve(root: &Path, page: &PageFile, reference: &str) -> Resolution {
    if is_external(reference) {
        return Resolution::External;
    }

    let clean = strip_query_and_fragment(reference);
    let target = if clean.starts_with('/') {
        root.join(clean.trim_start_matches('/'))
    } else {
        page.directory().join(clean)
    };

    Resolution::Local(target)
}

pub fn is_external(reference: &str) -> bool {
    EXTERNAL_PREFIXES
        .iter()
        .any(|prefix| reference.starts_with(prefix))
}

/// Whether `reference` is acceptable: external, or present on disk.
pub fn reference_exists(root: &Path, page: &PageFile, reference: &str) -> bool {
    match resolve(root, page, reference) {
        Resolution::External => true,
        Resolution::Local(target) => {
            let exists = target.exists();
            if !exists {
                log::debug!("✗ {} -> {} (not found)", reference, target.display());
            }
            exists
        }
    }
}
