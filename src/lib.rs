//! # slideshow-kernel
//!
//! Deterministic slide pairing and greedy sequencing for tagged photo collections.
//!
//! Given items that are either Single (fill a slide alone) or Half (must be
//! paired), the kernel builds slides and orders them so consecutive slides
//! share a balanced number of tags.
//!
//! ## Core Contract
//!
//! 1. Merge Half items into pair slides, largest tag set with smallest
//! 2. Chain slides by nearest-neighbour search on a tag-overlap proxy score
//! 3. Emit the order with a fingerprint for reproducibility checks
//!
//! ## Architecture
//!
//! ```text
//! Listing → Catalog → SlideBuilder → Slides → ChainAssembler → Sequence → Listing
//!                          ↓                        ↓
//!                    UnpairedHalf            RestrictedScan
//! ```
//!
//! ## Determinism Guarantees
//!
//! - Same catalog + same policy → identical sequence and fingerprint
//! - Item sort is stable; ties keep catalog order
//! - Match ties go to the highest slide index
//!
//! The pass is heuristic: it approximates, but does not maximize, the sum of
//! [`interest`] over consecutive slides.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod types;
pub mod policy;
pub mod builder;
pub mod assembler;
pub mod planner;
pub mod listing;
pub mod config;
mod canonical;

// Re-exports
pub use types::{
    Tag, TagInterner, Item, ItemId, Orientation, Catalog,
    Slide, SlideItems, Sequence, SequenceFingerprint, AssemblyStatus, AssemblyStats,
};
pub use policy::{SequencePolicyV1, UnpairedHalf, RestrictedScan, overlap, proxy_score, interest};
pub use builder::{SlideBuilder, BuildOutput, sort_items};
pub use assembler::{ChainAssembler, MatchSearch, SearchPhase, Match, AssemblyError};
pub use planner::{SlideshowPlanner, Plan};
pub use listing::{
    parse_catalog, read_catalog, render_sequence, write_sequence, write_sequence_file, ListingError,
};
pub use config::{RunConfig, ConfigError};

/// Schema version for fingerprints.
/// Increment when the fingerprint input changes.
pub const SLIDESHOW_SCHEMA_VERSION: &str = "1.0.0";

/// Default policy version identifier.
pub const DEFAULT_POLICY_VERSION: &str = "sequence_policy_v1";
