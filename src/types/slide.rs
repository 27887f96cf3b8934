//! Slide types for the slideshow kernel.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::item::{Item, ItemId};
use super::tag::Tag;

/// The items held by a slide.
///
/// For a pair, the order is the order the builder chose and is kept for output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SlideItems {
    /// A Single item, or a promoted unpaired Half item.
    One(ItemId),
    /// Two Half items.
    Pair(ItemId, ItemId),
}

impl SlideItems {
    /// Item ids in output order.
    pub fn ids(&self) -> Vec<ItemId> {
        match *self {
            Self::One(id) => vec![id],
            Self::Pair(first, second) => vec![first, second],
        }
    }

    /// Whether this slide holds the given item.
    pub fn contains(&self, id: ItemId) -> bool {
        match *self {
            Self::One(only) => only == id,
            Self::Pair(first, second) => first == id || second == id,
        }
    }
}

impl fmt::Display for SlideItems {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One(id) => write!(f, "{}", id),
            Self::Pair(first, second) => write!(f, "{} {}", first, second),
        }
    }
}

/// A slide: one item, or a merged pair of Half items.
///
/// The tag set is frozen at construction. Placement state lives with the
/// assembler, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    /// Items on this slide.
    pub items: SlideItems,
    /// Tag set (union of the items' tags for a pair).
    pub tags: BTreeSet<Tag>,
}

impl Slide {
    /// Slide holding a single item.
    pub fn single(item: &Item) -> Self {
        Self {
            items: SlideItems::One(item.id),
            tags: item.tags.clone(),
        }
    }

    /// Slide holding two Half items; tags are the union of both.
    pub fn pair(first: &Item, second: &Item) -> Self {
        Self {
            items: SlideItems::Pair(first.id, second.id),
            tags: first.tags.union(&second.tags).copied().collect(),
        }
    }

    /// Number of distinct tags on the slide.
    pub fn tag_count(&self) -> usize {
        self.tags.len()
    }

    /// Whether this slide holds two items.
    pub fn is_pair(&self) -> bool {
        matches!(self.items, SlideItems::Pair(..))
    }
}
