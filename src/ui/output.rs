//! Output formatting and display logic for siteaudit

use serde::Serialize;

use crate::core::constants::output_formats;
use crate::core::error::Result;
use crate::duplicates::DuplicateReport;
use crate::ui::color::{Colors, colorize};
use crate::validation::LinkReport;

/// Render the duplicate image report as plain text.
///
/// `show_progress` adds the scanning banner printed before the report.
pub fn render_duplicates(report: &DuplicateReport, show_progress: bool) -> String {
    let mut out = String::new();

    if show_progress {
        out.push_str("Scanning for image usage...\n");
    }

    out.push_str(&format!(
        "\n{}\n",
        colorize("--- Duplicate Image Report ---", Colors::BOLD)
    ));
    for entry in &report.cross_page {
        out.push_str(&format!(
            "\nImage: {}\n",
            colorize(&entry.filename, Colors::YELLOW)
        ));
        out.push_str(&format!("Used {} times in:\n", entry.count()));
        for page in &entry.pages {
            out.push_str(&format!("  - {page}\n"));
        }
    }

    out.push_str(&format!(
        "\n{}\n",
        colorize("--- Per-Page Duplicates ---", Colors::BOLD)
    ));
    for entry in &report.per_page {
        out.push_str(&format!(
            "\nPage: {} has duplicates:\n",
            colorize(&entry.page, Colors::CYAN)
        ));
        for filename in &entry.filenames {
            out.push_str(&format!("  - {filename}\n"));
        }
    }

    out
}

/// Render the link report as plain text.
///
/// `show_progress` adds one `Checking <page>...` line per checked page.
pub fn render_links(report: &LinkReport, show_progress: bool) -> String {
    let mut out = String::new();

    if show_progress {
        for page in &report.checked_pages {
            out.push_str(&format!("Checking {page}...\n"));
        }
    }

    if report.is_clean() {
        out.push_str(&format!(
            "\n{}\n",
            colorize("No broken links found!", Colors::GREEN)
        ));
        return out;
    }

    out.push_str(&format!(
        "\n{}\n",
        colorize("Errors Found:", Colors::RED)
    ));
    for finding in &report.findings {
        out.push_str(&format!("{finding}\n"));
    }

    out
}

/// Both reports, as emitted by the `all` command in JSON mode.
#[derive(Debug, Serialize)]
pub struct CombinedReport<'a> {
    pub duplicates: &'a DuplicateReport,
    pub links: &'a LinkReport,
}

/// Pretty-printed JSON followed by a newline.
pub fn render_json<T: Serialize>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}

pub fn is_json(format: &str) -> bool {
    format == output_formats::JSON
}
