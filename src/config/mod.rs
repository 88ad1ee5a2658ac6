//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files and CLI arguments, and resolves the merged result into the
//! immutable [`SiteConfig`] handed to each audit.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::constants::{output_formats, site};
use crate::core::error::{Result, SiteAuditError};
use crate::core::types::PageFile;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory the manifest and `/`-prefixed references resolve against
    pub root_dir: Option<PathBuf>,

    /// Pages to scan, relative to the root, in report order
    pub pages: Option<Vec<String>>,

    /// Filenames that are expected to repeat (logos, shared assets)
    pub ignored_filenames: Option<Vec<String>>,

    /// Assets that get a dedicated existence check on every page that names them
    pub known_assets: Option<Vec<String>>,

    /// Output format (text, json)
    pub output_format: Option<String>,

    /// Enable verbose logging
    pub verbose: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root_dir: Some(PathBuf::from(site::DEFAULT_ROOT)),
            pages: Some(to_strings(&site::DEFAULT_PAGES)),
            ignored_filenames: Some(to_strings(&site::DEFAULT_IGNORED_FILENAMES)),
            known_assets: Some(to_strings(&site::DEFAULT_KNOWN_ASSETS)),
            output_format: Some(output_formats::DEFAULT.to_string()),
            verbose: Some(false),
        }
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

impl Config {
    /// Load configuration from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            SiteAuditError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            SiteAuditError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Try to find and load a config file in standard locations
    pub fn load_from_standard_locations() -> Result<Self> {
        Self::load_from_dir(Path::new("."))
    }

    /// Look for the config file in `dir` and up to three parents, falling
    /// back to defaults when none exists. A config file that is found but
    /// cannot be loaded is an error.
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        for depth in 0..=site::CONFIG_SEARCH_DEPTH {
            let mut candidate = dir.to_path_buf();
            for _ in 0..depth {
                candidate.push("..");
            }
            candidate.push(site::CONFIG_FILE_NAME);

            if candidate.is_file() {
                let config = Self::load_from_file(&candidate)?;
                log::debug!("Loaded config from {}", candidate.display());
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        if let Some(ref root) = cli_config.root_dir {
            self.root_dir = Some(root.clone());
        }
        if let Some(ref pages) = cli_config.pages {
            self.pages = Some(pages.clone());
        }
        if let Some(ref ignored) = cli_config.ignored_filenames {
            self.ignored_filenames = Some(ignored.clone());
        }
        if let Some(ref assets) = cli_config.known_assets {
            self.known_assets = Some(assets.clone());
        }
        if let Some(ref output_format) = cli_config.output_format {
            self.output_format = Some(output_format.clone());
        }
        if cli_config.verbose {
            self.verbose = Some(true);
        }
    }

    pub fn output_format(&self) -> &str {
        self.output_format
            .as_deref()
            .unwrap_or(output_formats::DEFAULT)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(ref pages) = self.pages {
            if pages.is_empty() {
                return Err(SiteAuditError::Config(
                    "Page manifest is empty. Expected at least one page path.".to_string(),
                ));
            }
            for page in pages {
                if page.trim().is_empty() {
                    return Err(SiteAuditError::Config(
                        "Page manifest contains an empty path.".to_string(),
                    ));
                }
                if Path::new(page).is_absolute() || page.starts_with('/') {
                    return Err(SiteAuditError::Config(format!(
                        "Page '{page}' is absolute. Manifest paths are relative to root_dir."
                    )));
                }
            }
        }

        if let Some(ref names) = self.ignored_filenames {
            validate_bare_filenames("ignored_filenames", names)?;
        }
        if let Some(ref assets) = self.known_assets {
            validate_bare_filenames("known_assets", assets)?;
        }

        if let Some(ref format) = self.output_format
            && !output_formats::ALL.contains(&format.as_str())
        {
            return Err(SiteAuditError::Config(format!(
                "Invalid output format '{format}'. Expected one of: {}.",
                output_formats::ALL.join(", ")
            )));
        }

        Ok(())
    }

    /// Resolve into the immutable site definition used by the audits.
    pub fn site(&self) -> Result<SiteConfig> {
        self.validate()?;

        let root_dir = self
            .root_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(site::DEFAULT_ROOT));
        let pages = self
            .pages
            .clone()
            .unwrap_or_else(|| to_strings(&site::DEFAULT_PAGES));
        let ignored = self
            .ignored_filenames
            .clone()
            .unwrap_or_else(|| to_strings(&site::DEFAULT_IGNORED_FILENAMES));
        let known_assets = self
            .known_assets
            .clone()
            .unwrap_or_else(|| to_strings(&site::DEFAULT_KNOWN_ASSETS));

        Ok(SiteConfig::new(root_dir, pages, ignored, known_assets))
    }
}

fn validate_bare_filenames(field: &str, names: &[String]) -> Result<()> {
    for name in names {
        if name.trim().is_empty() {
            return Err(SiteAuditError::Config(format!(
                "{field} contains an empty filename."
            )));
        }
        if name.contains(['/', '\\']) {
            return Err(SiteAuditError::Config(format!(
                "{field} entry '{name}' is a path. Expected a bare filename such as 'logo.png'."
            )));
        }
    }
    Ok(())
}

/// Configuration options that can come from CLI
#[derive(Debug, Default)]
pub struct CliConfig {
    // Site
    pub root_dir: Option<PathBuf>,              // --root
    pub pages: Option<Vec<String>>,             // --page
    pub ignored_filenames: Option<Vec<String>>, // --ignore
    pub known_assets: Option<Vec<String>>,      // --known-asset

    // Output & format
    pub quiet: bool,                   // --quiet
    pub verbose: bool,                 // --verbose
    pub output_format: Option<String>, // --format
    pub fail_on_duplicates: bool,      // --fail-on-duplicates

    // Configuration
    pub config_file: Option<String>, // --config
    pub no_config: bool,             // --no-config
}

/// The site being audited. Built once and shared read-only by every audit.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    root_dir: PathBuf,
    pages: Vec<PageFile>,
    ignored_filenames: FxHashSet<String>,
    known_assets: Vec<String>,
}

impl SiteConfig {
    pub fn new<I, K>(root_dir: PathBuf, pages: Vec<String>, ignored: I, known_assets: K) -> Self
    where
        I: IntoIterator<Item = String>,
        K: IntoIterator<Item = String>,
    {
        let pages = pages
            .into_iter()
            .map(|page| PageFile::new(&root_dir, page))
            .collect();

        Self {
            root_dir,
            pages,
            ignored_filenames: ignored.into_iter().collect(),
            known_assets: known_assets.into_iter().collect(),
        }
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    pub fn pages(&self) -> &[PageFile] {
        &self.pages
    }

    pub fn is_ignored(&self, filename: &str) -> bool {
        self.ignored_filenames.contains(filename)
    }

    pub fn known_assets(&self) -> &[String] {
        &self.known_assets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.root_dir, Some(PathBuf::from(".")));
        assert_eq!(config.pages.as_ref().map(Vec::len), Some(10));
        assert_eq!(config.output_format(), output_formats::DEFAULT);
        assert_eq!(config.verbose, Some(false));
    }

    #[test]
    fn test_config_load_from_file() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(
            b"root_dir = \"/srv/site\"\npages = [\"index.html\", \"es/index.html\"]\noutput_format = \"json\"",
        )?;

        let config = Config::load_from_file(file.path())?;
        assert_eq!(config.root_dir, Some(PathBuf::from("/srv/site")));
        assert_eq!(
            config.pages,
            Some(vec!["index.html".to_string(), "es/index.html".to_string()])
        );
        assert_eq!(config.output_format(), "json");
        assert_eq!(config.ignored_filenames, None);

        Ok(())
    }

    #[test]
    fn test_config_load_from_file_invalid_toml() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(b"pages = [\"index.html\"")?;

        let err = Config::load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, SiteAuditError::Config(_)));
        assert!(err.to_string().contains("Invalid TOML in config file"));

        Ok(())
    }

    #[test]
    fn test_config_load_from_missing_file() {
        let err = Config::load_from_file("definitely-not-here.toml").unwrap_err();
        assert!(matches!(err, SiteAuditError::Config(_)));
    }

    #[test]
    fn test_config_load_from_dir_finds_parent_config() -> Result<()> {
        let temp = tempfile::tempdir()?;
        fs::write(
            temp.path().join(site::CONFIG_FILE_NAME),
            "known_assets = [\"brand.svg\"]",
        )?;
        let nested = temp.path().join("a/b");
        fs::create_dir_all(&nested)?;

        let config = Config::load_from_dir(&nested)?;
        assert_eq!(config.known_assets, Some(vec!["brand.svg".to_string()]));

        Ok(())
    }

    #[test]
    fn test_config_load_from_dir_falls_back_to_defaults() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let nested = temp.path().join("a/b/c/d/e");
        fs::create_dir_all(&nested)?;

        let config = Config::load_from_dir(&nested)?;
        assert_eq!(config.pages.as_ref().map(Vec::len), Some(10));

        Ok(())
    }

    #[test]
    fn test_config_load_from_dir_rejects_broken_config() -> Result<()> {
        let temp = tempfile::tempdir()?;
        fs::write(
            temp.path().join(site::CONFIG_FILE_NAME),
            "pages = [\"home.html\"",
        )?;
        let nested = temp.path().join("docs");
        fs::create_dir_all(&nested)?;

        let err = Config::load_from_dir(&nested).unwrap_err();
        assert!(matches!(err, SiteAuditError::Config(_)));
        assert!(err.to_string().contains("Invalid TOML in config file"));
        assert!(err.to_string().contains(site::CONFIG_FILE_NAME));

        Ok(())
    }

    #[test]
    fn test_config_merge_with_cli() {
        let mut config = Config::default();
        let cli_config = CliConfig {
            root_dir: Some(PathBuf::from("/tmp/site")),
            pages: Some(vec!["fr/index.html".to_string()]),
            verbose: true,
            ..Default::default()
        };

        config.merge_with_cli(&cli_config);

        assert_eq!(config.root_dir, Some(PathBuf::from("/tmp/site")));
        assert_eq!(config.pages, Some(vec!["fr/index.html".to_string()]));
        assert_eq!(config.verbose, Some(true));
        // Untouched fields keep their values
        assert_eq!(config.known_assets, Some(vec!["T1.png".to_string()]));
    }

    #[test]
    fn test_validate_rejects_empty_manifest() {
        let config = Config {
            pages: Some(vec![]),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_absolute_page() {
        let config = Config {
            pages: Some(vec!["/etc/index.html".to_string()]),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("is absolute"));
    }

    #[test]
    fn test_validate_rejects_path_in_ignore_list() {
        let config = Config {
            ignored_filenames: Some(vec!["img/logo.png".to_string()]),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("ignored_filenames"));
    }

    #[test]
    fn test_validate_rejects_unknown_format() {
        let config = Config {
            output_format: Some("yaml".to_string()),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Invalid output format 'yaml'"));
    }

    #[test]
    fn test_site_resolution() -> Result<()> {
        let config = Config {
            root_dir: Some(PathBuf::from("/srv/site")),
            pages: None,
            ..Default::default()
        };

        let site = config.site()?;
        assert_eq!(site.root_dir(), Path::new("/srv/site"));
        assert_eq!(site.pages().len(), 10);
        assert_eq!(site.pages()[0].relative(), "index.html");
        assert_eq!(
            site.pages()[5].absolute(),
            Path::new("/srv/site/es/index.html")
        );
        assert!(site.is_ignored("telecare-logo-transparent.png"));
        assert!(!site.is_ignored("team.jpg"));
        assert_eq!(site.known_assets(), ["T1.png".to_string()]);

        Ok(())
    }
}
