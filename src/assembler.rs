//! Chain assembler.
//!
//! Orders slides by repeated nearest-neighbour search on tag overlap.
//!
//! ## Algorithm
//!
//! 1. Place the start slide and mark it used
//! 2. While slides remain unplaced:
//!    - Restricted phase: search same-size candidates (see [`RestrictedScan`])
//!    - Unrestricted phase: if nothing was found, search every unused slide
//!    - Place the best match and continue from it
//!    - If neither phase finds a candidate, stop with a partial sequence
//!
//! Candidates are scanned from the highest index down. A proxy score of zero
//! ends the scan immediately; otherwise the first candidate with the lowest
//! score wins. Each step is O(N), so a full pass is O(N²).

use std::collections::BTreeMap;

use crate::policy::{proxy_score, RestrictedScan, SequencePolicyV1};
use crate::types::{AssemblyStats, AssemblyStatus, Sequence, Slide};

/// Error type for assembler operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssemblyError {
    /// Requested start index is outside the slide list.
    #[error("Start slide {start} out of range for {total} slides")]
    StartOutOfRange {
        /// Requested start index.
        start: usize,
        /// Number of slides.
        total: usize,
    },
}

/// Which candidate set a search considers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    /// Same tag count as the current slide only.
    Restricted,
    /// Every unused slide.
    Unrestricted,
}

/// A candidate chosen by the match search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    /// Index of the candidate in the slide arena.
    pub index: usize,
    /// Proxy score of the transition (lower is better).
    pub score: usize,
}

/// Match search over a flat slide arena.
///
/// Owns the `used` flags for the duration of one assembly pass.
#[derive(Debug)]
pub struct MatchSearch<'a> {
    slides: &'a [Slide],
    used: Vec<bool>,
    scan: RestrictedScan,
    /// Slide indices by tag count, ascending.
    buckets: BTreeMap<usize, Vec<usize>>,
    comparisons: u64,
}

impl<'a> MatchSearch<'a> {
    /// Create a search over `slides` with nothing used yet.
    pub fn new(slides: &'a [Slide], scan: RestrictedScan) -> Self {
        let mut buckets: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
        if scan == RestrictedScan::SizeBuckets {
            for (index, slide) in slides.iter().enumerate() {
                buckets.entry(slide.tag_count()).or_default().push(index);
            }
        }

        Self {
            slides,
            used: vec![false; slides.len()],
            scan,
            buckets,
            comparisons: 0,
        }
    }

    /// Mark a slide as placed.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range for the slide arena.
    pub fn mark_used(&mut self, index: usize) {
        self.used[index] = true;
    }

    /// Whether a slide has been placed.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range for the slide arena.
    pub fn is_used(&self, index: usize) -> bool {
        self.used[index]
    }

    /// Candidates scored so far.
    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    /// Find the best unused successor for the slide at `current`.
    ///
    /// Returns `None` when the phase has no eligible candidate.
    ///
    /// # Panics
    ///
    /// Panics if `current` is out of range for the slide arena.
    pub fn best_match(&mut self, current: usize, phase: SearchPhase) -> Option<Match> {
        let size = self.slides[current].tag_count();
        let mut scan = Scan {
            slides: self.slides,
            used: &self.used,
            current,
            comparisons: &mut self.comparisons,
        };

        match (phase, self.scan) {
            (SearchPhase::Restricted, RestrictedScan::SizeBuckets) => {
                let bucket = self.buckets.get(&size).map(Vec::as_slice).unwrap_or_default();
                scan.run(bucket.iter().rev().copied(), None)
            }
            (SearchPhase::Restricted, RestrictedScan::BackwardEarlyExit) => {
                scan.run((0..self.slides.len()).rev(), Some(size))
            }
            (SearchPhase::Unrestricted, _) => scan.run((0..self.slides.len()).rev(), None),
        }
    }
}

/// One scoring pass over a candidate index stream.
struct Scan<'s> {
    slides: &'s [Slide],
    used: &'s [bool],
    current: usize,
    comparisons: &'s mut u64,
}

impl Scan<'_> {
    /// With `size_gate`, smaller candidates are skipped and the first larger
    /// one ends the scan.
    fn run(
        &mut self,
        candidates: impl Iterator<Item = usize>,
        size_gate: Option<usize>,
    ) -> Option<Match> {
        let current = &self.slides[self.current];
        let mut best: Option<Match> = None;

        for index in candidates {
            if index == self.current || self.used[index] {
                continue;
            }
            let candidate = &self.slides[index];

            if let Some(size) = size_gate {
                if candidate.tag_count() < size {
                    continue;
                }
                if candidate.tag_count() > size {
                    break;
                }
            }

            *self.comparisons += 1;
            let score = proxy_score(current, candidate);
            if score == 0 {
                return Some(Match { index, score });
            }
            if best.map_or(true, |b| score < b.score) {
                best = Some(Match { index, score });
            }
        }

        best
    }
}

/// Greedy chain assembler.
#[derive(Debug, Clone, Default)]
pub struct ChainAssembler {
    policy: SequencePolicyV1,
}

impl ChainAssembler {
    /// Create an assembler with the given policy.
    pub fn new(policy: SequencePolicyV1) -> Self {
        Self { policy }
    }

    /// Get the policy.
    pub fn policy(&self) -> &SequencePolicyV1 {
        &self.policy
    }

    /// Order slides starting from the first one.
    ///
    /// An empty slide list yields an empty, complete sequence.
    pub fn assemble(&self, slides: Vec<Slide>) -> Sequence {
        if slides.is_empty() {
            return Sequence::empty();
        }
        self.run(slides, 0)
    }

    /// Order slides starting from the slide at `start`.
    pub fn assemble_from(
        &self,
        slides: Vec<Slide>,
        start: usize,
    ) -> Result<Sequence, AssemblyError> {
        if start >= slides.len() {
            return Err(AssemblyError::StartOutOfRange {
                start,
                total: slides.len(),
            });
        }
        Ok(self.run(slides, start))
    }

    fn run(&self, slides: Vec<Slide>, start: usize) -> Sequence {
        let total = slides.len();
        let mut stats = AssemblyStats::default();
        let mut status = AssemblyStatus::Complete;
        let mut order = Vec::with_capacity(total);

        let mut search = MatchSearch::new(&slides, self.policy.restricted_scan);
        search.mark_used(start);
        order.push(start);
        let mut current = start;

        while order.len() < total {
            let found = match search.best_match(current, SearchPhase::Restricted) {
                Some(m) => {
                    stats.restricted_hits += 1;
                    Some(m)
                }
                None => search.best_match(current, SearchPhase::Unrestricted).map(|m| {
                    stats.fallback_hits += 1;
                    m
                }),
            };

            let Some(next) = found else {
                status = AssemblyStatus::Exhausted {
                    placed: order.len(),
                    total,
                };
                tracing::warn!(
                    placed = order.len(),
                    total,
                    "match search exhausted, sequence is partial"
                );
                break;
            };

            if next.score == 0 {
                stats.perfect_matches += 1;
            }
            search.mark_used(next.index);
            order.push(next.index);
            current = next.index;

            let interval = self.policy.progress_interval;
            if interval > 0 && order.len() % interval == 0 {
                tracing::debug!(placed = order.len(), total, "assembly progress");
            }
        }
        stats.comparisons = search.comparisons();

        let mut arena: Vec<Option<Slide>> = slides.into_iter().map(Some).collect();
        let ordered: Vec<Slide> = order.iter().filter_map(|&i| arena[i].take()).collect();

        tracing::info!(
            placed = ordered.len(),
            total,
            comparisons = stats.comparisons,
            restricted_hits = stats.restricted_hits,
            fallback_hits = stats.fallback_hits,
            perfect_matches = stats.perfect_matches,
            scan = %self.policy.restricted_scan,
            "assembled sequence"
        );

        Sequence {
            slides: ordered,
            status,
            stats,
        }
    }
}
