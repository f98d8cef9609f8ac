//! Fleet storage solver.
//!
//! Groups the catalog by location, allocates each location independently,
//! drops locations without a covering selection, and orders the survivors
//! by total price (stable, so equal prices keep first-seen location order).
//!
//! # Complexity
//!
//! O(L log L) where L = number of listings.

use tracing::{debug, trace};

use super::grouping::group_by_location;
use crate::allocation::{Allocation, AllocationPolicy, CheapestFirst};
use crate::models::{Fleet, Listing, LocationResult};

/// Solves fleet storage requests with an allocation policy.
///
/// Holds no state between calls; one solver can serve any number of
/// requests, including from several threads.
///
/// # Examples
///
/// ```
/// use u_storage::models::{Fleet, Listing};
/// use u_storage::solver::StorageSolver;
///
/// let listings = vec![
///     Listing::new("1", "1", 20, 30, 100),
///     Listing::new("2", "2", 20, 30, 150),
///     Listing::new("3", "3", 10, 10, 10),
/// ];
/// let fleet = Fleet::new(10).with_class(20, 3);
///
/// let results = StorageSolver::new().solve(&fleet, &listings);
/// assert_eq!(results.len(), 2);
/// assert_eq!(results[0].location_id(), "1");
/// assert_eq!(results[1].total_price(), 150);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StorageSolver<P = CheapestFirst> {
    policy: P,
}

impl StorageSolver<CheapestFirst> {
    /// Creates a solver using [`CheapestFirst`].
    pub fn new() -> Self {
        Self {
            policy: CheapestFirst,
        }
    }
}

impl<P: AllocationPolicy> StorageSolver<P> {
    /// Creates a solver with a custom allocation policy.
    pub fn with_policy(policy: P) -> Self {
        Self { policy }
    }

    /// The allocation policy in use.
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Returns every location able to host the whole fleet, cheapest first.
    ///
    /// Locations whose listings cannot cover the fleet's required area are
    /// omitted, as are empty selections (a fleet needing no area). An empty
    /// fleet or catalog yields no results.
    pub fn solve(&self, fleet: &Fleet, listings: &[Listing]) -> Vec<LocationResult> {
        let required_area = fleet.required_area();
        let groups = group_by_location(listings);
        let mut results = Vec::with_capacity(groups.len());

        for group in &groups {
            match self.policy.allocate(required_area, group.listings()) {
                Allocation::Covered(selection) if !selection.is_empty() => {
                    trace!(
                        location_id = group.location_id(),
                        listings = selection.len(),
                        total_price = selection.total_price(),
                        "location covered"
                    );
                    let total_price = selection.total_price();
                    results.push(LocationResult::new(
                        group.location_id(),
                        selection.into_listing_ids(),
                        total_price,
                    ));
                }
                Allocation::Covered(_) => {
                    trace!(location_id = group.location_id(), "empty selection dropped");
                }
                Allocation::Infeasible => {
                    trace!(
                        location_id = group.location_id(),
                        available_area = group.total_area(),
                        "location infeasible"
                    );
                }
            }
        }

        results.sort_by_key(|r| r.total_price());

        debug!(
            required_area,
            vehicles = fleet.num_vehicles(),
            listings = listings.len(),
            locations = groups.len(),
            feasible = results.len(),
            "solved fleet storage"
        );

        results
    }
}

/// Solves with the default [`CheapestFirst`] policy.
///
/// Shorthand for `StorageSolver::new().solve(fleet, listings)`.
pub fn solve(fleet: &Fleet, listings: &[Listing]) -> Vec<LocationResult> {
    StorageSolver::new().solve(fleet, listings)
}
