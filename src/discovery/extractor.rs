use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::constants::references::IMAGE_EXTENSIONS;
use crate::core::error::Result;
use crate::core::types::{ReferenceKind, ResourceReference};

const IMG_TAG_SRC_PATTERN: &str = r#"<img[^>]+src=["']([^"']+)["']"#;
const BACKGROUND_IMAGE_PATTERN: &str = r#"background-image:\s*url\(["']?([^"')]+)["']?\)"#;
const SRC_ATTRIBUTE_PATTERN: &str = r#"src=["']([^"']+)["']"#;
const CSS_URL_PATTERN: &str = r#"url\(["']?([^"')]+)["']?\)"#;
const LINK_ATTRIBUTE_PATTERN: &str = r#"(?:src|href)=["']([^"']+)["']"#;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("Failed to compile reference pattern")
}

static IMG_TAG_SRC: Lazy<Regex> = Lazy::new(|| compile(IMG_TAG_SRC_PATTERN));
static BACKGROUND_IMAGE: Lazy<Regex> = Lazy::new(|| compile(BACKGROUND_IMAGE_PATTERN));
static SRC_ATTRIBUTE: Lazy<Regex> = Lazy::new(|| compile(SRC_ATTRIBUTE_PATTERN));
static CSS_URL: Lazy<Regex> = Lazy::new(|| compile(CSS_URL_PATTERN));
static LINK_ATTRIBUTE: Lazy<Regex> = Lazy::new(|| compile(LINK_ATTRIBUTE_PATTERN));

/// Which references to pull out of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionProfile {
    /// `<img src>` values followed by `background-image: url(...)` values
    ImageUsage,
    /// Any `src=` or `url(...)` value that names an image file
    ImageOccurrence,
    /// Every `src=` and `href=` value
    Links,
}

impl ExtractionProfile {
    fn passes(self) -> Vec<(&'static Regex, ReferenceKind)> {
        match self {
            ExtractionProfile::ImageUsage => vec![
                (&*IMG_TAG_SRC, ReferenceKind::Attribute),
                (&*BACKGROUND_IMAGE, ReferenceKind::Css),
            ],
            ExtractionProfile::ImageOccurrence => vec![
                (&*SRC_ATTRIBUTE, ReferenceKind::Attribute),
                (&*CSS_URL, ReferenceKind::Css),
            ],
            ExtractionProfile::Links => vec![(&*LINK_ATTRIBUTE, ReferenceKind::Attribute)],
        }
    }

    fn images_only(self) -> bool {
        matches!(self, ExtractionProfile::ImageOccurrence)
    }
}

/// Extract references from page markup.
///
/// Passes run in the profile's order and each pass yields its matches in
/// text order, so the result is deterministic for a given input.
pub fn extract(content: &str, profile: ExtractionProfile) -> Vec<ResourceReference> {
    let mut references = Vec::new();

    for (pattern, kind) in profile.passes() {
        for captures in pattern.captures_iter(content) {
            let Some(value) = captures.get(1) else {
                continue;
            };
            let value = value.as_str();
            if profile.images_only() && !has_image_extension(value) {
                continue;
            }
            references.push(ResourceReference::new(value, kind));
        }
    }

    references
}

/// Whether a raw reference ends in one of the recognized image extensions.
pub fn has_image_extension(reference: &str) -> bool {
    let lower = reference.to_ascii_lowercase();
    IMAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// Matches the `src` value that names one specific asset.
#[derive(Debug, Clone)]
pub struct AssetMatcher {
    asset: String,
    pattern: Regex,
}

impl AssetMatcher {
    pub fn new(asset: &str) -> Result<Self> {
        let pattern = Regex::new(&format!(
            r#"src=["']([^"']*{})["']"#,
            regex::escape(asset)
        ))?;
        Ok(Self {
            asset: asset.to_string(),
            pattern,
        })
    }

    pub fn asset(&self) -> &str {
        &self.asset
    }

    /// Cheap substring test before running the regex.
    pub fn is_mentioned(&self, content: &str) -> bool {
        memchr::memmem::find(content.as_bytes(), self.asset.as_bytes()).is_some()
    }

    /// The first `src` value in `content` that ends with the asset name.
    pub fn find_src<'c>(&self, content: &'c str) -> Option<&'c str> {
        self.pattern
            .captures(content)
            .and_then(|captures| captures.get(1))
            .map(|m| m.as_str())
    }
}
