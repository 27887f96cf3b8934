//! Transition scoring between slides.

use crate::types::Slide;

/// Number of tags present on both slides.
///
/// Symmetric: `overlap(a, b) == overlap(b, a)`.
pub fn overlap(a: &Slide, b: &Slide) -> usize {
    let (small, large) = if a.tags.len() <= b.tags.len() { (a, b) } else { (b, a) };
    small.tags.iter().filter(|tag| large.tags.contains(tag)).count()
}

/// Greedy proxy score for placing `candidate` after `current`. Lower is better.
///
/// Formula:
/// ```text
/// score = |floor(min(|current|, |candidate|) / 2) - overlap|
/// ```
///
/// Zero means the overlap sits at half of the smaller tag set, which tends to
/// balance the three terms of [`interest`].
pub fn proxy_score(current: &Slide, candidate: &Slide) -> usize {
    let shared = overlap(current, candidate);
    let target = current.tag_count().min(candidate.tag_count()) / 2;
    target.abs_diff(shared)
}

/// True transition objective between consecutive slides.
///
/// ```text
/// interest = min(overlap, |a| - overlap, |b| - overlap)
/// ```
pub fn interest(a: &Slide, b: &Slide) -> usize {
    let shared = overlap(a, b);
    shared
        .min(a.tag_count() - shared)
        .min(b.tag_count() - shared)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Item, ItemId, Orientation, Tag};

    fn slide(id: u32, tags: &[u32]) -> Slide {
        let tags = tags.iter().map(|t| Tag::new(*t));
        Slide::single(&Item::new(ItemId::new(id), Orientation::Single, tags))
    }

    #[test]
    fn test_overlap_symmetric() {
        let a = slide(0, &[1, 2, 3, 4]);
        let b = slide(1, &[3, 4, 5]);
        assert_eq!(overlap(&a, &b), 2);
        assert_eq!(overlap(&b, &a), 2);
    }

    #[test]
    fn test_proxy_score_perfect_match() {
        // min size 2 -> target 1; overlap {b} = 1
        let a = slide(0, &[1, 2]);
        let b = slide(1, &[2, 3]);
        assert_eq!(proxy_score(&a, &b), 0);
    }

    #[test]
    fn test_proxy_score_penalizes_both_directions() {
        let a = slide(0, &[1, 2, 3, 4]);
        let same = slide(1, &[1, 2, 3, 4]);
        let disjoint = slide(2, &[5, 6, 7, 8]);
        // target 2: identical overlaps 4, disjoint overlaps 0
        assert_eq!(proxy_score(&a, &same), 2);
        assert_eq!(proxy_score(&a, &disjoint), 2);
    }

    #[test]
    fn test_proxy_score_single_tag_slides() {
        // min size 1 -> target 0; no overlap is already perfect
        let a = slide(0, &[1, 2]);
        let b = slide(1, &[9]);
        assert_eq!(proxy_score(&a, &b), 0);
    }

    #[test]
    fn test_interest() {
        let a = slide(0, &[1, 2, 3, 4]);
        let b = slide(1, &[3, 4, 5, 6]);
        assert_eq!(interest(&a, &b), 2);
        assert_eq!(interest(&a, &a), 0);
        assert_eq!(interest(&a, &slide(2, &[7])), 0);
    }
}
