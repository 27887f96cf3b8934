//! Golden tests for the slideshow kernel.
//!
//! These tests verify determinism and correctness of the full pass,
//! from input listing to output listing.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use slideshow_kernel::{
    parse_catalog, render_sequence,
    Catalog, Item, ItemId, Orientation, Tag,
    SlideshowPlanner, SequencePolicyV1, RestrictedScan, UnpairedHalf,
    SlideBuilder, ChainAssembler,
};

// ─────────────────────────────────────────────────────────────────────────────
// Test Helpers
// ─────────────────────────────────────────────────────────────────────────────

const SCENARIO: &str = "4\nH 1 a\nV 1 b\nV 1 c\nH 2 a b\n";

fn policy(unpaired_half: UnpairedHalf, restricted_scan: RestrictedScan) -> SequencePolicyV1 {
    SequencePolicyV1::new(unpaired_half, restricted_scan, 0)
}

fn all_policies() -> Vec<SequencePolicyV1> {
    let mut policies = Vec::new();
    for unpaired in [UnpairedHalf::Drop, UnpairedHalf::Promote] {
        for scan in [RestrictedScan::SizeBuckets, RestrictedScan::BackwardEarlyExit] {
            policies.push(policy(unpaired, scan));
        }
    }
    policies
}

fn random_catalog(seed: u64, n: u32, tag_pool: u32) -> Catalog {
    let mut rng = StdRng::seed_from_u64(seed);
    let items = (0..n)
        .map(|id| {
            let orientation = if rng.random_range(0..3) == 0 {
                Orientation::Half
            } else {
                Orientation::Single
            };
            let tag_count = rng.random_range(1..=8);
            let tags: Vec<Tag> = (0..tag_count)
                .map(|_| Tag::new(rng.random_range(0..tag_pool)))
                .collect();
            Item::new(ItemId::new(id), orientation, tags)
        })
        .collect();
    Catalog::new(items)
}

// ─────────────────────────────────────────────────────────────────────────────
// SCENARIO TESTS
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_hand_traced_scenario() {
    let catalog = parse_catalog(SCENARIO).unwrap();

    for policy in all_policies() {
        let plan = SlideshowPlanner::new(policy.clone()).plan(&catalog);
        assert!(plan.sequence.is_complete());
        assert_eq!(
            render_sequence(&plan.sequence),
            "3\n3\n1 2\n0\n",
            "scenario output differs under {:?}",
            policy
        );
    }
}

#[test]
fn test_scenario_slides_and_phases() {
    let catalog = parse_catalog(SCENARIO).unwrap();
    let built = SlideBuilder::new(UnpairedHalf::Drop).build(&catalog);

    let listing: Vec<String> = built.slides.iter().map(|s| s.items.to_string()).collect();
    assert_eq!(listing, vec!["3", "0", "1 2"]);
    assert_eq!(built.slides[2].tag_count(), 2);

    let sequence = ChainAssembler::default().assemble(built.slides);
    // S0 -> S2 via the restricted phase, S2 -> S1 via the fallback.
    assert_eq!(sequence.stats.restricted_hits, 1);
    assert_eq!(sequence.stats.fallback_hits, 1);
    assert_eq!(sequence.stats.perfect_matches, 2);
}

#[test]
fn test_empty_listing() {
    let catalog = parse_catalog("0\n").unwrap();
    let plan = SlideshowPlanner::default().plan(&catalog);

    assert!(plan.sequence.is_empty());
    assert!(plan.sequence.is_complete());
    assert_eq!(render_sequence(&plan.sequence), "0\n");
}

#[test]
fn test_only_one_half_item() {
    let catalog = parse_catalog("1\nV 2 a b\n").unwrap();

    let dropped = SlideshowPlanner::new(policy(UnpairedHalf::Drop, RestrictedScan::SizeBuckets))
        .plan(&catalog);
    assert_eq!(render_sequence(&dropped.sequence), "0\n");
    assert_eq!(dropped.dropped, Some(ItemId::new(0)));

    let promoted = SlideshowPlanner::new(policy(UnpairedHalf::Promote, RestrictedScan::SizeBuckets))
        .plan(&catalog);
    assert_eq!(render_sequence(&promoted.sequence), "1\n0\n");
}

// ─────────────────────────────────────────────────────────────────────────────
// DETERMINISM TESTS
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_same_catalog_same_fingerprint_50_runs() {
    let catalog = random_catalog(0x5eed, 300, 40);
    let planner = SlideshowPlanner::default();
    let first = planner.plan(&catalog);

    for run in 1..50 {
        let plan = planner.plan(&catalog);
        assert_eq!(
            first.fingerprint, plan.fingerprint,
            "Fingerprint must be deterministic (run {} differs from run 0)",
            run
        );
        assert_eq!(render_sequence(&first.sequence), render_sequence(&plan.sequence));
    }
}

#[test]
fn test_policy_change_changes_fingerprint() {
    let catalog = random_catalog(7, 50, 20);
    let plan = |scan| SlideshowPlanner::new(policy(UnpairedHalf::Drop, scan)).plan(&catalog);
    let a = plan(RestrictedScan::SizeBuckets);
    let b = plan(RestrictedScan::BackwardEarlyExit);

    assert_ne!(a.policy_params_hash, b.policy_params_hash);
    assert_ne!(a.fingerprint, b.fingerprint);
}

// ─────────────────────────────────────────────────────────────────────────────
// CORRECTNESS TESTS
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_coverage_and_uniqueness() {
    for seed in 1..20u64 {
        let catalog = random_catalog(seed, 120, 30);
        let singles: Vec<ItemId> = catalog.items.iter()
            .filter(|i| i.orientation == Orientation::Single)
            .map(|i| i.id)
            .collect();
        let halves = catalog.count(Orientation::Half);

        for policy in all_policies() {
            let plan = SlideshowPlanner::new(policy.clone()).plan(&catalog);
            let sequence = &plan.sequence;

            assert!(sequence.is_complete());
            assert!(sequence.items_unique(), "item reused under {:?}", policy);

            for id in &singles {
                let holders = sequence.slides.iter().filter(|s| s.items.contains(*id)).count();
                assert_eq!(holders, 1, "single item {} not placed exactly once", id);
            }

            let paired: usize = sequence.slides.iter().filter(|s| s.is_pair()).count() * 2;
            assert_eq!(paired, 2 * (halves / 2));

            let expected_slides = singles.len() + halves / 2 + match policy.unpaired_half {
                UnpairedHalf::Promote => halves % 2,
                UnpairedHalf::Drop => 0,
            };
            assert_eq!(sequence.len(), expected_slides);

            let leftover = plan.dropped.or(plan.promoted);
            assert_eq!(leftover.is_some(), halves % 2 == 1);
            if let Some(id) = plan.dropped {
                assert!(!sequence.item_ids().contains(&id));
            }
        }
    }
}

#[test]
fn test_assembly_comparisons_quadratic() {
    // Every slide has four private tags, so no transition ever scores zero and
    // every search scores all remaining slides.
    fn comparisons(n: u32, scan: RestrictedScan) -> u64 {
        let items = (0..n)
            .map(|id| {
                let tags = (0..4).map(|k| Tag::new(id * 4 + k));
                Item::new(ItemId::new(id), Orientation::Single, tags)
            })
            .collect();
        let planner = SlideshowPlanner::new(policy(UnpairedHalf::Drop, scan));
        let plan = planner.plan(&Catalog::new(items));
        assert_eq!(plan.sequence.stats.perfect_matches, 0);
        plan.sequence.stats.comparisons
    }

    for scan in [RestrictedScan::SizeBuckets, RestrictedScan::BackwardEarlyExit] {
        let mut previous = None;
        for n in [100u32, 200, 400, 800] {
            let count = comparisons(n, scan);
            let n = n as u64;
            assert_eq!(count, n * (n - 1) / 2);

            if let Some(prev) = previous {
                let ratio = count as f64 / prev as f64;
                assert!((3.5..4.5).contains(&ratio), "doubling N scaled work by {ratio}");
            }
            previous = Some(count);
        }
    }
}
