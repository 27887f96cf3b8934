//! Sequence policy definitions.

pub mod v1;
pub mod scoring;

pub use v1::{RestrictedScan, SequencePolicyV1, UnpairedHalf};
pub use scoring::{interest, overlap, proxy_score};
