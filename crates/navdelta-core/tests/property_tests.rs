//! Property-based tests for delta and matrix invariants.
//!
//! These tests verify properties that must hold for any pair of snapshots:
//! - The three buckets partition the union of companies
//! - Comparing a snapshot with itself yields only unchanged records
//! - Swapping the arguments swaps added/removed and negates deltas
//! - Matrix cells reproduce every snapshot exactly

use proptest::prelude::*;
use std::collections::{BTreeMap, HashSet};

use navdelta_core::prelude::*;
use navdelta_core::CompanyKey;

// =============================================================================
// Generators
// =============================================================================

/// Weight with two decimals, sometimes undisclosed.
fn arb_weight() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![
        9 => (0u32..1500).prop_map(|n| Some(f64::from(n) / 100.0)),
        1 => Just(None),
    ]
}

/// Holdings with unique names drawn from a small pool so periods overlap.
fn arb_holdings() -> impl Strategy<Value = Vec<Holding>> {
    proptest::collection::btree_map("[A-H][a-c]{0,2}", arb_weight(), 0..12).prop_map(
        |companies: BTreeMap<String, Option<f64>>| {
            companies
                .into_iter()
                .map(|(company, weight)| match weight {
                    Some(w) => Holding::new(company, w),
                    None => Holding::undisclosed(company),
                })
                .collect()
        },
    )
}

fn arb_snapshot(month: Month) -> impl Strategy<Value = Snapshot> {
    arb_holdings().prop_map(move |holdings| {
        Snapshot::new("mirae", Period::new(month, 2025), holdings)
    })
}

fn keys(holdings: &[Holding]) -> HashSet<CompanyKey> {
    holdings.iter().map(Holding::key).collect()
}

fn record_keys(records: &[DeltaRecord]) -> Vec<CompanyKey> {
    records.iter().map(|r| CompanyKey::new(&r.company)).collect()
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every company of either snapshot lands in exactly one bucket, and
    /// `all` is exactly the union of the buckets.
    #[test]
    fn prop_buckets_partition_union(
        previous in arb_snapshot(Month::June),
        current in arb_snapshot(Month::July),
    ) {
        let delta = compute_delta(&current, &previous).unwrap();
        let cur = keys(&current.holdings);
        let prev = keys(&previous.holdings);

        for key in record_keys(&delta.added) {
            prop_assert!(cur.contains(&key) && !prev.contains(&key));
        }
        for key in record_keys(&delta.removed) {
            prop_assert!(prev.contains(&key) && !cur.contains(&key));
        }
        for key in record_keys(&delta.changed) {
            prop_assert!(prev.contains(&key) && cur.contains(&key));
        }

        let union: HashSet<CompanyKey> = cur.union(&prev).cloned().collect();
        let bucketed: Vec<CompanyKey> = record_keys(&delta.added)
            .into_iter()
            .chain(record_keys(&delta.changed))
            .chain(record_keys(&delta.removed))
            .collect();
        prop_assert_eq!(bucketed.len(), union.len());
        prop_assert_eq!(bucketed.into_iter().collect::<HashSet<_>>(), union);
        prop_assert_eq!(
            delta.all.len(),
            delta.added.len() + delta.changed.len() + delta.removed.len()
        );
    }

    /// `all` is ordered by non-increasing absolute delta.
    #[test]
    fn prop_all_sorted_by_magnitude(
        previous in arb_snapshot(Month::June),
        current in arb_snapshot(Month::July),
    ) {
        let delta = compute_delta(&current, &previous).unwrap();
        for pair in delta.all.windows(2) {
            prop_assert!(pair[0].nav_delta.abs() >= pair[1].nav_delta.abs());
        }
    }

    /// Status always agrees with the sign of the delta and with presence.
    #[test]
    fn prop_status_matches_delta(
        previous in arb_snapshot(Month::June),
        current in arb_snapshot(Month::July),
    ) {
        let delta = compute_delta(&current, &previous).unwrap();
        for record in &delta.added {
            prop_assert_eq!(record.status, DeltaStatus::New);
            prop_assert_eq!(record.previous, NavWeight::NotHeld);
        }
        for record in &delta.removed {
            prop_assert_eq!(record.status, DeltaStatus::Exited);
            prop_assert_eq!(record.current, NavWeight::NotHeld);
        }
        for record in &delta.changed {
            prop_assert_eq!(record.status, DeltaStatus::from_delta(record.nav_delta));
            prop_assert!(record.current.is_held() && record.previous.is_held());
        }
    }

    /// A snapshot compared with itself has no movement.
    #[test]
    fn prop_self_compare_is_unchanged(snapshot in arb_snapshot(Month::June)) {
        let delta = compute_delta(&snapshot, &snapshot).unwrap();
        prop_assert!(delta.added.is_empty());
        prop_assert!(delta.removed.is_empty());
        prop_assert_eq!(delta.changed.len(), snapshot.len());
        for record in &delta.all {
            prop_assert_eq!(record.status, DeltaStatus::Unchanged);
            prop_assert_eq!(record.nav_delta, 0.0);
        }
    }

    /// Swapping current and previous swaps added/removed and negates deltas.
    #[test]
    fn prop_reverse_comparison_is_antisymmetric(
        a in arb_snapshot(Month::June),
        b in arb_snapshot(Month::July),
    ) {
        let forward = compute_delta(&b, &a).unwrap();
        let backward = compute_delta(&a, &b).unwrap();

        prop_assert_eq!(record_keys(&forward.added), record_keys(&backward.removed));
        prop_assert_eq!(forward.changed.len(), backward.changed.len());

        for record in &forward.all {
            let other = backward.find(&record.company).unwrap();
            prop_assert_eq!(other.nav_delta, -record.nav_delta);
            prop_assert_eq!(other.status, record.status.reversed());
            prop_assert_eq!(other.current, record.previous);
        }
    }

    /// Matrix cells reproduce each snapshot, and every other cell is not held.
    #[test]
    fn prop_matrix_reproduces_snapshots(
        may in arb_snapshot(Month::May),
        june in arb_snapshot(Month::June),
        july in arb_snapshot(Month::July),
    ) {
        let periods = vec![may, june, july];
        let matrix = build_matrix(&FundId::new("mirae"), &periods).unwrap();

        let union: HashSet<CompanyKey> =
            periods.iter().flat_map(|s| keys(&s.holdings)).collect();
        prop_assert_eq!(matrix.rows.len(), union.len());

        for (col, snapshot) in periods.iter().enumerate() {
            let present = keys(&snapshot.holdings);
            for row in &matrix.rows {
                let cell = row.cells[col];
                if present.contains(&CompanyKey::new(&row.company)) {
                    prop_assert!(cell.is_held());
                } else {
                    prop_assert_eq!(cell, NavWeight::NotHeld);
                }
            }
            for holding in &snapshot.holdings {
                prop_assert_eq!(
                    matrix.cell(&holding.company, snapshot.period),
                    Some(holding.weight())
                );
            }
        }
    }

    /// Applying a query to its own output changes nothing.
    #[test]
    fn prop_query_is_idempotent(
        previous in arb_snapshot(Month::June),
        current in arb_snapshot(Month::July),
        sort in prop_oneof![
            Just(SortKey::NavDesc),
            Just(SortKey::NavAsc),
            Just(SortKey::DeltaDesc),
            Just(SortKey::DeltaAsc),
            Just(SortKey::NameAsc),
        ],
        search in "[a-c]{0,1}",
    ) {
        let delta = compute_delta(&current, &previous).unwrap();
        let query = DeltaQuery::new().with_search(search).with_sort(sort);

        let once = query.apply(&delta);
        let again = DeltaSet { all: once.clone(), ..delta.clone() };
        prop_assert_eq!(query.apply(&again), once.clone());

        for record in &once {
            prop_assert!(query.matches(record));
        }
        prop_assert!(once.len() <= delta.len());
    }
}
