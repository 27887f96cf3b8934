//! Tag types for the slideshow kernel.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Opaque tag identifier.
///
/// Tags compare and hash by their interned value only. The label text a tag
/// came from is an ingestion detail and is not carried past the interner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Tag(u32);

impl Tag {
    /// Create a tag from a raw interned value.
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the raw interned value.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u32> for Tag {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Maps tag labels to dense [`Tag`] values.
///
/// Values are assigned in first-seen order, so the same listing always
/// interns to the same tags. Distinct labels never share a value.
#[derive(Debug, Clone, Default)]
pub struct TagInterner {
    labels: HashMap<String, Tag>,
}

impl TagInterner {
    /// Create an empty interner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a label, returning its tag.
    pub fn intern(&mut self, label: &str) -> Tag {
        if let Some(tag) = self.labels.get(label) {
            return *tag;
        }
        let tag = Tag(self.labels.len() as u32);
        self.labels.insert(label.to_string(), tag);
        tag
    }

    /// Look up a label without interning it.
    pub fn get(&self, label: &str) -> Option<Tag> {
        self.labels.get(label).copied()
    }

    /// Number of distinct labels seen.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether no label has been interned yet.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intern_first_seen_order() {
        let mut interner = TagInterner::new();
        assert_eq!(interner.intern("sunset"), Tag::new(0));
        assert_eq!(interner.intern("beach"), Tag::new(1));
        assert_eq!(interner.intern("sunset"), Tag::new(0));
        assert_eq!(interner.len(), 2);
    }

    #[test]
    fn test_intern_is_injective() {
        // Labels that collide under a naive base-36 reading must stay distinct.
        let mut interner = TagInterner::new();
        let a = interner.intern("a");
        let b = interner.intern("0a");
        assert_ne!(a, b);
        assert_eq!(interner.get("0a"), Some(b));
        assert_eq!(interner.get("missing"), None);
    }
}
