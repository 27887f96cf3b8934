//! Slide builder.
//!
//! Sorts the catalog and merges Half items into pair slides.
//!
//! ## Algorithm
//!
//! 1. Stable sort: Single before Half, then by descending tag count.
//!    Ties keep catalog order.
//! 2. Walk the sorted list with a forward cursor `i` and a tail cursor `j`:
//!    - Single at `i`: emit a one-item slide.
//!    - Half at `i` with `i + 1 < j`: pair it with the item at `j - 1`
//!      (the smallest remaining Half item), then shrink the tail.
//!    - Half at `i` with `i + 1 == j`: no partner left (see [`UnpairedHalf`]).
//!    - Half at `i >= j`: already consumed as a partner.
//!
//! Largest Half items are paired with the smallest ones so merged tag
//! counts stay balanced.

use crate::policy::UnpairedHalf;
use crate::types::{Catalog, Item, ItemId, Orientation, Slide};

/// Slides produced from a catalog.
#[derive(Debug, Clone, Default)]
pub struct BuildOutput {
    /// Slides in build order.
    pub slides: Vec<Slide>,
    /// Half item left without a partner and dropped, if any.
    pub dropped: Option<ItemId>,
    /// Half item left without a partner and promoted to its own slide, if any.
    pub promoted: Option<ItemId>,
}

/// Stable-sort items for pairing.
pub fn sort_items(items: &[Item]) -> Vec<&Item> {
    let mut sorted: Vec<&Item> = items.iter().collect();
    sorted.sort_by(|a, b| {
        a.orientation
            .cmp(&b.orientation)
            .then_with(|| b.tag_count().cmp(&a.tag_count()))
    });
    sorted
}

/// Builds slides from catalog items.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlideBuilder {
    unpaired_half: UnpairedHalf,
}

impl SlideBuilder {
    /// Create a builder with the given leftover-Half handling.
    pub fn new(unpaired_half: UnpairedHalf) -> Self {
        Self { unpaired_half }
    }

    /// Build slides from the catalog.
    pub fn build(&self, catalog: &Catalog) -> BuildOutput {
        let sorted = sort_items(&catalog.items);
        let mut output = BuildOutput {
            slides: Vec::with_capacity(sorted.len()),
            ..BuildOutput::default()
        };

        let mut j = sorted.len();
        for (i, item) in sorted.iter().enumerate() {
            match item.orientation {
                Orientation::Single => output.slides.push(Slide::single(item)),
                Orientation::Half if i + 1 < j => {
                    output.slides.push(Slide::pair(item, sorted[j - 1]));
                    j -= 1;
                }
                Orientation::Half if i + 1 == j => match self.unpaired_half {
                    UnpairedHalf::Drop => output.dropped = Some(item.id),
                    UnpairedHalf::Promote => {
                        output.slides.push(Slide::single(item));
                        output.promoted = Some(item.id);
                    }
                },
                Orientation::Half => {}
            }
        }

        tracing::debug!(
            items = catalog.len(),
            slides = output.slides.len(),
            pairs = output.slides.iter().filter(|s| s.is_pair()).count(),
            dropped = ?output.dropped,
            promoted = ?output.promoted,
            "built slides"
        );

        output
    }
}
