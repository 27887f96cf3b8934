//! SequencePolicy v1: pairing and match-search knobs.
//!
//! The policy is hashed canonically so a sequence fingerprint records
//! which knobs produced it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::canonical::canonical_hash_hex;
use crate::DEFAULT_POLICY_VERSION;

/// What to do with a Half item left without a partner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnpairedHalf {
    /// Leave it out of the slide list entirely.
    Drop,
    /// Emit it as a one-item slide.
    Promote,
}

impl UnpairedHalf {
    /// Parse from a config string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "drop" => Some(Self::Drop),
            "promote" => Some(Self::Promote),
            _ => None,
        }
    }
}

impl Default for UnpairedHalf {
    fn default() -> Self {
        Self::Drop
    }
}

impl fmt::Display for UnpairedHalf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Drop => write!(f, "drop"),
            Self::Promote => write!(f, "promote"),
        }
    }
}

/// How the restricted search phase enumerates candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestrictedScan {
    /// Scan only slides whose tag count equals the current slide's,
    /// highest index first. Slides are grouped by tag count up front.
    SizeBuckets,
    /// Scan every index from the top down, skipping smaller slides and
    /// stopping at the first larger one. Only equivalent to `SizeBuckets`
    /// when slides are in non-increasing tag-count order.
    BackwardEarlyExit,
}

impl RestrictedScan {
    /// Parse from a config string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "buckets" | "size_buckets" | "size-buckets" => Some(Self::SizeBuckets),
            "early-exit" | "early_exit" | "backward_early_exit" => Some(Self::BackwardEarlyExit),
            _ => None,
        }
    }
}

impl Default for RestrictedScan {
    fn default() -> Self {
        Self::SizeBuckets
    }
}

impl fmt::Display for RestrictedScan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeBuckets => write!(f, "size_buckets"),
            Self::BackwardEarlyExit => write!(f, "backward_early_exit"),
        }
    }
}

/// Parameters that affect the produced sequence.
#[derive(Debug, Serialize)]
struct PolicyParams<'a> {
    version: &'a str,
    unpaired_half: UnpairedHalf,
    restricted_scan: RestrictedScan,
}

/// Sequence policy version 1.
///
/// ## Parameters
///
/// - `unpaired_half`: fate of an odd leftover Half item
/// - `restricted_scan`: candidate enumeration in the restricted phase
/// - `progress_interval`: log progress every N placements (0 disables)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequencePolicyV1 {
    /// Policy version identifier.
    pub version: String,
    /// Fate of an unpaired Half item.
    pub unpaired_half: UnpairedHalf,
    /// Restricted phase strategy.
    pub restricted_scan: RestrictedScan,
    /// Progress logging interval in placed slides.
    pub progress_interval: usize,
}

impl SequencePolicyV1 {
    /// Create a new policy.
    pub fn new(
        unpaired_half: UnpairedHalf,
        restricted_scan: RestrictedScan,
        progress_interval: usize,
    ) -> Self {
        Self {
            version: DEFAULT_POLICY_VERSION.to_string(),
            unpaired_half,
            restricted_scan,
            progress_interval,
        }
    }

    /// Policy that reproduces the reference listing behaviour exactly:
    /// drop the leftover Half item and use the backward early-exit scan.
    pub fn reference() -> Self {
        Self::new(UnpairedHalf::Drop, RestrictedScan::BackwardEarlyExit, 100)
    }

    /// Get the policy ID.
    pub fn policy_id(&self) -> &str {
        &self.version
    }

    /// Hash of the parameters that influence output.
    ///
    /// `progress_interval` only affects logging and is excluded.
    pub fn params_hash(&self) -> String {
        canonical_hash_hex(&PolicyParams {
            version: &self.version,
            unpaired_half: self.unpaired_half,
            restricted_scan: self.restricted_scan,
        })
    }
}

impl Default for SequencePolicyV1 {
    fn default() -> Self {
        Self::new(UnpairedHalf::default(), RestrictedScan::default(), 100)
    }
}
