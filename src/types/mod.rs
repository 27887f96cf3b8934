//! Core types for the slideshow kernel.

pub mod tag;
pub mod item;
pub mod slide;
pub mod sequence;

pub use tag::{Tag, TagInterner};
pub use item::{Catalog, Item, ItemId, Orientation};
pub use slide::{Slide, SlideItems};
pub use sequence::{AssemblyStats, AssemblyStatus, Sequence, SequenceFingerprint};
