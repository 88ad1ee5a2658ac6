use std::fmt;

/// Error types for siteaudit operations that stop a run.
///
/// Problems found *in* the site (broken links, missing pages) are not errors
/// in this sense; they are collected as findings in the audit reports.
#[derive(Debug)]
pub enum SiteAuditError {
    /// IO error (file operations, etc.)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// Regex compilation error
    Regex(regex::Error),

    /// JSON serialization error
    Json(serde_json::Error),
}

impl fmt::Display for SiteAuditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteAuditError::Io(err) => write!(f, "IO error: {err}"),
            SiteAuditError::Config(msg) => write!(f, "Configuration error: {msg}"),
            SiteAuditError::Regex(err) => write!(f, "Regex error: {err}"),
            SiteAuditError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl std::error::Error for SiteAuditError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SiteAuditError::Io(err) => Some(err),
            SiteAuditError::Regex(err) => Some(err),
            SiteAuditError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SiteAuditError {
    fn from(err: std::io::Error) -> Self {
        SiteAuditError::Io(err)
    }
}

impl From<regex::Error> for SiteAuditError {
    fn from(err: regex::Error) -> Self {
        SiteAuditError::Regex(err)
    }
}

impl From<serde_json::Error> for SiteAuditError {
    fn from(err: serde_json::Error) -> Self {
        SiteAuditError::Json(err)
    }
}

/// Type alias for Results using SiteAuditError
pub type Result<T> = std::result::Result<T, SiteAuditError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_display() {
        let config_error = SiteAuditError::Config("Manifest is empty".to_string());
        assert_eq!(
            format!("{config_error}"),
            "Configuration error: Manifest is empty"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let converted = SiteAuditError::from(io_error);

        assert!(matches!(converted, SiteAuditError::Io(_)));
        assert!(format!("{converted}").starts_with("IO error:"));
    }

    #[test]
    #[allow(clippy::invalid_regex)]
    fn test_error_from_regex() {
        let regex_error = regex::Regex::new("[invalid").unwrap_err();
        let converted = SiteAuditError::from(regex_error);

        assert!(matches!(converted, SiteAuditError::Regex(_)));
        assert!(converted.source().is_some());
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let converted = SiteAuditError::from(json_error);

        assert!(matches!(converted, SiteAuditError::Json(_)));
        assert!(converted.source().is_some());
    }

    #[test]
    fn test_error_config_has_no_source() {
        let error = SiteAuditError::Config("test".to_string());

        assert!(error.source().is_none());
        assert!(format!("{error}").contains(':'));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SiteAuditError>();
    }
}
