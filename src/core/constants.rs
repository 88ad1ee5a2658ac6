/// Application-wide constants to avoid magic values throughout the codebase.
///
/// The site defaults mirror the website this tool was first written for:
/// five pages, each with an English and a Spanish variant.
/// Output format constants
pub mod output_formats {
    /// Text output format - human readable report
    pub const TEXT: &str = "text";
    /// JSON output format - structured output for automation
    pub const JSON: &str = "json";

    /// Default output format
    pub const DEFAULT: &str = TEXT;

    /// All valid output formats
    pub const ALL: [&str; 2] = [TEXT, JSON];
}

/// Default site definition
pub mod site {
    /// Default site root, relative to the working directory
    pub const DEFAULT_ROOT: &str = ".";

    /// Default page manifest, scanned in this order
    pub const DEFAULT_PAGES: [&str; 10] = [
        "index.html",
        "who-we-are/index.html",
        "services/index.html",
        "career/index.html",
        "contact-us/index.html",
        "es/index.html",
        "es/who-we-are/index.html",
        "es/services/index.html",
        "es/career/index.html",
        "es/contact-us/index.html",
    ];

    /// Shared assets (logos, icons) that are expected on many pages
    pub const DEFAULT_IGNORED_FILENAMES: [&str; 3] = [
        "T1.png",
        "telecare-logo-transparent.png",
        "PHOTO-2023-11-14-16-41-58.jpg",
    ];

    /// Assets with a history of going missing; guarded on every page
    pub const DEFAULT_KNOWN_ASSETS: [&str; 1] = ["T1.png"];

    /// Config file looked up in the working directory and its parents
    pub const CONFIG_FILE_NAME: &str = ".siteaudit.toml";

    /// How many parent directories to search for the config file
    pub const CONFIG_SEARCH_DEPTH: usize = 3;
}

/// Reference classification constants
pub mod references {
    /// Prefixes of references that are never checked on disk
    pub const EXTERNAL_PREFIXES: [&str; 6] =
        ["http", "https", "#", "mailto:", "tel:", "javascript:"];

    /// Extensions that mark a reference as an image (compared lowercase)
    pub const IMAGE_EXTENSIONS: [&str; 5] = [".png", ".jpg", ".jpeg", ".gif", ".webp"];
}

/// Report labels
pub mod labels {
    pub const BROKEN_LINK: &str = "[BROKEN LINK]";
    pub const BROKEN_IMAGE: &str = "[BROKEN IMAGE]";
    pub const CRITICAL: &str = "CRITICAL:";
    pub const PROCESSING_ERROR: &str = "Error processing";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_formats_constants() {
        assert_eq!(output_formats::TEXT, "text");
        assert_eq!(output_formats::JSON, "json");
        assert_eq!(output_formats::DEFAULT, "text");
        assert_eq!(output_formats::ALL.len(), 2);
    }

    #[test]
    fn test_default_manifest_has_spanish_variants() {
        let english: Vec<&str> = site::DEFAULT_PAGES
            .iter()
            .copied()
            .filter(|p| !p.starts_with("es/"))
            .collect();

        assert_eq!(english.len(), 5);
        for page in english {
            assert!(site::DEFAULT_PAGES.contains(&format!("es/{page}").as_str()));
        }
    }

    #[test]
    fn test_known_assets_are_ignored_for_duplicates() {
        for asset in site::DEFAULT_KNOWN_ASSETS {
            assert!(site::DEFAULT_IGNORED_FILENAMES.contains(&asset));
        }
    }
}
