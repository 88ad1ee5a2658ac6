use crate::config::SiteConfig;
use crate::core::audit::AuditReport;
use log::{debug, info, warn};

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Off // Only show structured logs in verbose mode
    };

    // An already-installed logger is left in place
    let _ = env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .try_init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log the resolved site definition
pub fn log_site_info(site: &SiteConfig) {
    info!(
        "Site root: {} ({} page(s) in manifest)",
        site.root_dir().display(),
        site.pages().len()
    );
    for (i, page) in site.pages().iter().enumerate() {
        debug!("  {}. {}", i + 1, page.relative());
    }
    if !site.known_assets().is_empty() {
        info!("Known assets: {}", site.known_assets().join(", "));
    }
}

/// Log the outcome of one audit
pub fn log_audit_complete<R: AuditReport>(audit: &str, report: &R, duration_ms: u128) {
    if report.has_findings() {
        warn!(
            "❌ {audit} complete: {} finding(s) ({duration_ms}ms)",
            report.finding_count()
        );
    } else {
        info!("✅ {audit} complete: no findings ({duration_ms}ms)");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::duplicates::DuplicateReport;
    use crate::validation::{LinkFinding, LinkReport};
    use std::path::PathBuf;

    #[test]
    fn test_logger_initialization_is_repeatable() {
        init_logger(true, false);
        init_logger(false, true);
        init_logger(false, false);
    }

    #[test]
    fn test_log_site_info() {
        let site = SiteConfig::new(
            PathBuf::from("/srv/site"),
            vec!["index.html".to_string(), "es/index.html".to_string()],
            vec!["logo.png".to_string()],
            vec!["T1.png".to_string()],
        );
        log_site_info(&site);
    }

    #[test]
    fn test_log_audit_complete() {
        log_audit_complete("duplicates", &DuplicateReport::default(), 3);

        let report = LinkReport {
            checked_pages: vec![],
            findings: vec![LinkFinding::MissingManifestFile {
                path: PathBuf::from("/srv/site/fr/index.html"),
            }],
        };
        log_audit_complete("links", &report, 12);
    }
}
