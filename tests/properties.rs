//! Property tests for the storage solver over random catalogs.

use std::collections::HashMap;

use proptest::prelude::*;
use u_storage::catalog::{Catalog, CatalogGenerator, GeneratorConfig};
use u_storage::evaluation::ResultValidator;
use u_storage::models::{Fleet, Listing, DEFAULT_VEHICLE_WIDTH};
use u_storage::solver::{group_by_location, solve};

fn fleet_strategy() -> impl Strategy<Value = Fleet> {
    prop::collection::vec((1u64..=60, 1u64..=4), 0..4).prop_map(|classes| {
        classes
            .into_iter()
            .fold(Fleet::new(DEFAULT_VEHICLE_WIDTH), |f, (len, qty)| {
                f.with_class(len, qty)
            })
    })
}

fn catalog_strategy() -> impl Strategy<Value = Vec<Listing>> {
    prop::collection::vec((0usize..6, 1u64..=40, 1u64..=40, 0u64..=500), 0..30).prop_map(
        |rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (loc, len, wid, price))| {
                    Listing::new(i.to_string(), format!("loc-{loc}"), len, wid, price)
                })
                .collect()
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Results only use own-location listings, cover the fleet, price exactly, and are sorted.
    #[test]
    fn prop_results_are_consistent(fleet in fleet_strategy(), listings in catalog_strategy()) {
        let results = solve(&fleet, &listings);
        let violations = ResultValidator::new(&fleet, &listings).validate_all(&results);
        prop_assert!(violations.is_empty(), "{:?}", violations);
    }

    /// Non-decreasing total price.
    #[test]
    fn prop_sorted_by_price(fleet in fleet_strategy(), listings in catalog_strategy()) {
        let results = solve(&fleet, &listings);
        for pair in results.windows(2) {
            prop_assert!(pair[0].total_price() <= pair[1].total_price());
        }
    }

    /// A location is reported iff its total area covers a non-empty requirement.
    #[test]
    fn prop_feasibility_matches_total_area(fleet in fleet_strategy(), listings in catalog_strategy()) {
        let required = fleet.required_area();
        let results = solve(&fleet, &listings);
        let reported: HashMap<&str, usize> = results
            .iter()
            .enumerate()
            .map(|(i, r)| (r.location_id(), i))
            .collect();
        prop_assert_eq!(reported.len(), results.len());

        for group in group_by_location(&listings) {
            let expected = required > 0 && group.total_area() >= required;
            prop_assert_eq!(reported.contains_key(group.location_id()), expected);
        }
    }

    /// Removing the last selected listing leaves the area uncovered.
    #[test]
    fn prop_selection_stops_once_covered(fleet in fleet_strategy(), listings in catalog_strategy()) {
        let by_id: HashMap<&str, &Listing> = listings.iter().map(|l| (l.id(), l)).collect();
        let required = fleet.required_area();
        for r in solve(&fleet, &listings) {
            let ids = r.listing_ids();
            let prefix: u64 = ids[..ids.len() - 1].iter().map(|id| by_id[id.as_str()].area()).sum();
            prop_assert!(prefix < required);
        }
    }

    /// Each selection is the shortest covering prefix of its location's listings in stable price order.
    #[test]
    fn prop_selection_is_price_ordered_prefix(fleet in fleet_strategy(), listings in catalog_strategy()) {
        let required = fleet.required_area();
        let results = solve(&fleet, &listings);
        for group in group_by_location(&listings) {
            let Some(result) = results.iter().find(|r| r.location_id() == group.location_id()) else {
                continue;
            };
            let mut ordered: Vec<&Listing> = group.listings().to_vec();
            ordered.sort_by_key(|l| l.price());

            let mut expected = Vec::new();
            let mut covered = 0u64;
            for l in ordered {
                if covered >= required {
                    break;
                }
                covered += l.area();
                expected.push(l.id().to_string());
            }
            prop_assert_eq!(result.listing_ids(), expected.as_slice());
        }
    }

    #[test]
    fn prop_idempotent(fleet in fleet_strategy(), listings in catalog_strategy()) {
        prop_assert_eq!(solve(&fleet, &listings), solve(&fleet, &listings));
    }
}

#[test]
fn test_generated_catalog_end_to_end() {
    let config = GeneratorConfig::default()
        .with_num_locations(200)
        .with_listings_per_location(1..=8)
        .with_seed(11);
    let catalog: Catalog = CatalogGenerator::new(config).generate();
    let fleet = Fleet::new(DEFAULT_VEHICLE_WIDTH)
        .with_class(20, 3)
        .with_class(35, 2);

    let results = solve(&fleet, catalog.listings());
    let validator = ResultValidator::new(&fleet, catalog.listings());
    assert!(validator.validate_all(&results).is_empty());
    assert!(results.len() <= catalog.num_locations());
}
