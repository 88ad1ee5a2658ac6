use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// One HTML document from the site manifest.
///
/// The relative path is what reports show; the absolute path is what gets
/// opened. Both are fixed once the manifest has been resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageFile {
    relative: String,
    absolute: PathBuf,
}

impl PageFile {
    /// Resolve a manifest entry against the site root.
    ///
    /// # Examples
    /// ```
    /// use siteaudit::core::PageFile;
    /// use std::path::Path;
    ///
    /// let page = PageFile::new(Path::new("/srv/site"), "es/index.html");
    /// assert_eq!(page.relative(), "es/index.html");
    /// assert_eq!(page.absolute(), Path::new("/srv/site/es/index.html"));
    /// ```
    pub fn new(root: &Path, relative: impl Into<String>) -> Self {
        let relative = relative.into();
        let absolute = root.join(&relative);
        Self { relative, absolute }
    }

    pub fn relative(&self) -> &str {
        &self.relative
    }

    pub fn absolute(&self) -> &Path {
        &self.absolute
    }

    /// Directory that relative references in this page resolve against.
    pub fn directory(&self) -> &Path {
        self.absolute.parent().unwrap_or_else(|| Path::new(""))
    }
}

impl fmt::Display for PageFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.relative)
    }
}

/// Where in the markup a reference was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceKind {
    /// An HTML attribute value such as `src="..."` or `href="..."`
    Attribute,
    /// A CSS `url(...)` value
    Css,
}

/// A resource reference extracted from page markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceReference {
    raw: String,
    filename: String,
    kind: ReferenceKind,
}

impl ResourceReference {
    pub fn new(raw: impl Into<String>, kind: ReferenceKind) -> Self {
        let raw = raw.into();
        let filename = normalize_filename(&raw).to_string();
        Self {
            raw,
            filename,
            kind,
        }
    }

    /// The value exactly as written in the markup.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The bare filename this reference points at.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn kind(&self) -> ReferenceKind {
        self.kind
    }
}

/// A page together with a reference in it that does not resolve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrokenLinkRecord {
    pub page: String,
    pub reference: String,
}

impl BrokenLinkRecord {
    pub fn new(page: &PageFile, reference: impl Into<String>) -> Self {
        Self {
            page: page.relative().to_string(),
            reference: reference.into(),
        }
    }
}

/// Strip the query string and fragment from a reference.
pub fn strip_query_and_fragment(reference: &str) -> &str {
    let without_query = reference.split('?').next().unwrap_or_default();
    without_query.split('#').next().unwrap_or_default()
}

/// Reduce a reference to its bare filename.
///
/// Both `/` and `\` count as directory separators so that references written
/// on Windows normalize the same way.
///
/// # Examples
/// ```
/// use siteaudit::core::types::normalize_filename;
///
/// assert_eq!(normalize_filename("../img/team.jpg?v=3"), "team.jpg");
/// assert_eq!(normalize_filename("hero.png#top"), "hero.png");
/// ```
pub fn normalize_filename(reference: &str) -> &str {
    let path = strip_query_and_fragment(reference);
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}
