use std::fs;
use std::io;

use crate::core::types::PageFile;

/// Read a manifest page as UTF-8.
///
/// Returns `Ok(None)` when the page is not on disk; whether that is an error
/// is up to the caller. Any other failure (permissions, invalid UTF-8) is
/// returned as is.
pub fn read_page(page: &PageFile) -> io::Result<Option<String>> {
    if !page.absolute().exists() {
        log::debug!("Page not found: {}", page.absolute().display());
        return Ok(None);
    }

    let content = fs::read_to_string(page.absolute())?;
    log::debug!("Read {} ({} bytes)", page.relative(), content.len());
    Ok(Some(content))
}
