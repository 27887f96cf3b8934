//! Slideshow planner.
//!
//! Runs one pass: catalog → [`SlideBuilder`] → [`ChainAssembler`] → [`Plan`].

use serde::{Deserialize, Serialize};

use crate::assembler::ChainAssembler;
use crate::builder::SlideBuilder;
use crate::policy::SequencePolicyV1;
use crate::types::{Catalog, ItemId, Sequence, SequenceFingerprint};

/// Result of planning a catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    /// Ordered slides.
    pub sequence: Sequence,
    /// Half item dropped for lack of a partner, if any.
    pub dropped: Option<ItemId>,
    /// Half item promoted to its own slide, if any.
    pub promoted: Option<ItemId>,
    /// Policy ID used.
    pub policy_id: String,
    /// Policy parameters hash.
    pub policy_params_hash: String,
    /// Fingerprint of the emitted order.
    pub fingerprint: SequenceFingerprint,
}

impl Plan {
    /// Sum of the transition objective over the sequence.
    pub fn total_interest(&self) -> u64 {
        self.sequence.total_interest()
    }
}

/// Plans slideshows under a fixed policy.
#[derive(Debug, Clone, Default)]
pub struct SlideshowPlanner {
    policy: SequencePolicyV1,
}

impl SlideshowPlanner {
    /// Create a planner with the given policy.
    pub fn new(policy: SequencePolicyV1) -> Self {
        Self { policy }
    }

    /// Get the policy.
    pub fn policy(&self) -> &SequencePolicyV1 {
        &self.policy
    }

    /// Build and order slides for the catalog.
    pub fn plan(&self, catalog: &Catalog) -> Plan {
        let built = SlideBuilder::new(self.policy.unpaired_half).build(catalog);
        if let Some(id) = built.dropped {
            tracing::info!(item = %id, "dropped unpaired half item");
        }

        let sequence = ChainAssembler::new(self.policy.clone()).assemble(built.slides);
        let policy_params_hash = self.policy.params_hash();
        let fingerprint = sequence.fingerprint(&policy_params_hash);

        Plan {
            sequence,
            dropped: built.dropped,
            promoted: built.promoted,
            policy_id: self.policy.policy_id().to_string(),
            policy_params_hash,
            fingerprint,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::UnpairedHalf;
    use crate::types::{Item, Orientation, Tag};

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Item::new(ItemId::new(0), Orientation::Half, [Tag::new(1), Tag::new(2)]),
            Item::new(ItemId::new(1), Orientation::Single, [Tag::new(2), Tag::new(3)]),
            Item::new(ItemId::new(2), Orientation::Half, [Tag::new(3)]),
            Item::new(ItemId::new(3), Orientation::Half, [Tag::new(4)]),
        ])
    }

    #[test]
    fn test_plan_reports_dropped_item() {
        let plan = SlideshowPlanner::default().plan(&catalog());

        assert_eq!(plan.sequence.len(), 2);
        assert_eq!(plan.dropped, Some(ItemId::new(2)));
        assert_eq!(plan.promoted, None);
        assert!(plan.sequence.is_complete());
    }

    #[test]
    fn test_plan_promotes_item() {
        let mut policy = SequencePolicyV1::default();
        policy.unpaired_half = UnpairedHalf::Promote;
        let plan = SlideshowPlanner::new(policy).plan(&catalog());

        assert_eq!(plan.sequence.len(), 3);
        assert_eq!(plan.promoted, Some(ItemId::new(2)));
        assert_eq!(plan.sequence.item_ids().len(), 4);
    }

    #[test]
    fn test_plan_fingerprint_stable() {
        let planner = SlideshowPlanner::default();
        let a = planner.plan(&catalog());
        let b = planner.plan(&catalog());

        assert_eq!(a.fingerprint, b.fingerprint);
        assert_eq!(a.policy_params_hash, planner.policy().params_hash());
    }
}
