//! Item (photo) types for the slideshow kernel.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::tag::Tag;

/// Identifier of an item, assigned by ingestion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemId(u32);

impl ItemId {
    /// Create a new ItemId.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw id.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ItemId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Orientation of an item.
///
/// Declaration order is the sort order: Single items come before Half items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Fills a slide on its own (listing letter `H`).
    Single,
    /// Must be paired with another Half item (listing letter `V`).
    Half,
}

impl Orientation {
    /// Parse orientation from its listing letter.
    pub fn from_letter(letter: &str) -> Option<Self> {
        match letter {
            "H" => Some(Self::Single),
            "V" => Some(Self::Half),
            _ => None,
        }
    }

    /// Listing letter for this orientation.
    pub fn letter(&self) -> char {
        match self {
            Self::Single => 'H',
            Self::Half => 'V',
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => write!(f, "single"),
            Self::Half => write!(f, "half"),
        }
    }
}

/// An ingested item. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique item identifier.
    pub id: ItemId,
    /// Single or Half.
    pub orientation: Orientation,
    /// Tag set (no duplicates).
    pub tags: BTreeSet<Tag>,
}

impl Item {
    /// Create a new item.
    pub fn new(id: ItemId, orientation: Orientation, tags: impl IntoIterator<Item = Tag>) -> Self {
        Self {
            id,
            orientation,
            tags: tags.into_iter().collect(),
        }
    }

    /// Number of distinct tags.
    pub fn tag_count(&self) -> usize {
        self.tags.len()
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.id, self.orientation.letter(), self.tags.len())?;
        for tag in &self.tags {
            write!(f, " {}", tag)?;
        }
        Ok(())
    }
}

/// The ingested list of items, in ingestion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    /// Items in ingestion order.
    pub items: Vec<Item>,
    /// Number of distinct tags across all items.
    pub distinct_tags: usize,
}

impl Catalog {
    /// Create a catalog from items.
    pub fn new(items: Vec<Item>) -> Self {
        let distinct_tags = items
            .iter()
            .flat_map(|item| item.tags.iter())
            .collect::<BTreeSet<_>>()
            .len();
        Self { items, distinct_tags }
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items with the given orientation.
    pub fn count(&self, orientation: Orientation) -> usize {
        self.items
            .iter()
            .filter(|item| item.orientation == orientation)
            .count()
    }
}
