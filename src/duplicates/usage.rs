use indexmap::IndexMap;
use serde::Serialize;

/// Image filename → every page occurrence, in the order they were recorded.
///
/// Filenames keep the position of their first occurrence, so iterating the
/// index gives the same order on every run over the same files.
#[derive(Debug, Default, Clone, Serialize)]
pub struct UsageIndex {
    entries: IndexMap<String, Vec<String>>,
}

impl UsageIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `filename` on `page`.
    pub fn record(&mut self, filename: &str, page: &str) {
        self.entries
            .entry(filename.to_string())
            .or_default()
            .push(page.to_string());
    }

    /// Pages (with repeats) that use `filename`.
    pub fn pages(&self, filename: &str) -> &[String] {
        self.entries.get(filename).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Entries with more than one occurrence.
    pub fn duplicates(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .filter(|(_, pages)| pages.len() > 1)
            .map(|(filename, pages)| (filename.as_str(), pages.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_lookup() {
        let mut index = UsageIndex::new();
        index.record("team.jpg", "services/index.html");
        index.record("team.jpg", "es/services/index.html");
        index.record("hero.png", "index.html");

        assert_eq!(index.len(), 2);
        assert_eq!(
            index.pages("team.jpg"),
            ["services/index.html", "es/services/index.html"]
        );
        assert!(index.pages("missing.png").is_empty());
    }

    #[test]
    fn test_duplicates_keep_first_seen_order() {
        let mut index = UsageIndex::new();
        index.record("b.png", "index.html");
        index.record("a.png", "index.html");
        index.record("a.png", "career/index.html");
        index.record("b.png", "es/index.html");

        let filenames: Vec<&str> = index.duplicates().map(|(f, _)| f).collect();
        assert_eq!(filenames, vec!["b.png", "a.png"]);
    }

    #[test]
    fn test_same_page_twice_counts_as_duplicate() {
        let mut index = UsageIndex::new();
        index.record("hero.jpg", "index.html");
        index.record("hero.jpg", "index.html");

        let duplicates: Vec<_> = index.duplicates().collect();
        assert_eq!(duplicates.len(), 1);
        assert_eq!(duplicates[0].1, ["index.html", "index.html"]);
    }

    #[test]
    fn test_single_use_is_not_duplicate() {
        let mut index = UsageIndex::new();
        index.record("hero.jpg", "index.html");

        assert_eq!(index.duplicates().count(), 0);
        assert!(!index.is_empty());
    }
}
