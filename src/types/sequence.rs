//! Sequence types for the slideshow kernel.
//!
//! A [`Sequence`] is the assembler's deliverable: the ordered slides plus
//! how the assembly ended and what the search cost.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::item::ItemId;
use super::slide::Slide;
use crate::policy::scoring::interest;
use crate::SLIDESHOW_SCHEMA_VERSION;

/// How an assembly pass ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AssemblyStatus {
    /// Every slide was placed.
    Complete,
    /// Neither search phase found a candidate; only `placed` of `total` slides are in the sequence.
    Exhausted {
        /// Slides placed before the search ran dry.
        placed: usize,
        /// Slides available to the assembler.
        total: usize,
    },
}

/// Search counters collected during assembly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssemblyStats {
    /// Candidates scored across all searches.
    pub comparisons: u64,
    /// Steps resolved by the restricted phase.
    pub restricted_hits: usize,
    /// Steps resolved by the unrestricted fallback.
    pub fallback_hits: usize,
    /// Steps whose chosen candidate had a proxy score of zero.
    pub perfect_matches: usize,
}

/// Fingerprint of an emitted sequence.
///
/// Same policy + same slide order → same fingerprint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SequenceFingerprint(String);

impl SequenceFingerprint {
    /// Compute a fingerprint over a policy params hash and the emitted slides.
    pub fn compute(params_hash: &str, slides: &[Slide]) -> Self {
        use std::hash::Hasher;
        use xxhash_rust::xxh64::Xxh64;

        let mut hasher = Xxh64::new(0);
        hasher.write(SLIDESHOW_SCHEMA_VERSION.as_bytes());
        hasher.write(params_hash.as_bytes());
        hasher.write(&(slides.len() as u64).to_le_bytes());

        for slide in slides {
            let ids = slide.items.ids();
            hasher.write(&[ids.len() as u8]);
            for id in ids {
                hasher.write(&id.value().to_le_bytes());
            }
        }

        Self(format!("{:016x}", hasher.finish()))
    }

    /// Get the fingerprint as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SequenceFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered slides chosen for output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sequence {
    /// Slides in output order.
    pub slides: Vec<Slide>,
    /// How assembly ended.
    pub status: AssemblyStatus,
    /// Search counters.
    pub stats: AssemblyStats,
}

impl Sequence {
    /// An empty, complete sequence.
    pub fn empty() -> Self {
        Self {
            slides: Vec::new(),
            status: AssemblyStatus::Complete,
            stats: AssemblyStats::default(),
        }
    }

    /// Number of slides in the sequence.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Whether the sequence has no slides.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Whether every available slide was placed.
    pub fn is_complete(&self) -> bool {
        self.status == AssemblyStatus::Complete
    }

    /// All item ids in output order.
    pub fn item_ids(&self) -> Vec<ItemId> {
        self.slides.iter().flat_map(|s| s.items.ids()).collect()
    }

    /// Check that no item appears on more than one slide.
    pub fn items_unique(&self) -> bool {
        let ids = self.item_ids();
        let distinct: BTreeSet<_> = ids.iter().collect();
        distinct.len() == ids.len()
    }

    /// Sum of the transition objective over consecutive slides.
    ///
    /// Reporting only; assembly never optimizes this value directly.
    pub fn total_interest(&self) -> u64 {
        self.slides
            .windows(2)
            .map(|pair| interest(&pair[0], &pair[1]) as u64)
            .sum()
    }

    /// Fingerprint of this sequence under the given policy params hash.
    pub fn fingerprint(&self, params_hash: &str) -> SequenceFingerprint {
        SequenceFingerprint::compute(params_hash, &self.slides)
    }
}
