use serde::{Deserialize, Serialize};

/// Insertion-ordered set of display tags.
///
/// Duplicates keep their first-seen position, and empty strings (what an
/// authored `[]` array splits into) are ignored. Mutation is limited to
/// [`TagSet::insert`]; readers get a slice view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagSet {
    entries: Vec<String>,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `tag` unless it is empty or already present. Idempotent.
    pub fn insert(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        if tag.is_empty() || self.entries.iter().any(|t| *t == tag) {
            return;
        }
        self.entries.push(tag);
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.entries.iter().any(|t| t == tag)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a TagSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_preserves_first_seen_order() {
        let mut tags = TagSet::new();
        tags.insert("Chroma");
        tags.insert("Mapping Extensions");
        tags.insert("Chroma");
        assert_eq!(tags.as_slice(), ["Chroma", "Mapping Extensions"]);
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut tags = TagSet::new();
        tags.insert("Noodle Extensions");
        tags.insert("Noodle Extensions");
        assert_eq!(tags.len(), 1);
    }

    #[test]
    fn test_insert_ignores_empty() {
        let mut tags = TagSet::new();
        tags.insert("");
        assert!(tags.is_empty());
    }
}
