//! Cheapest-listing-first area allocation.
//!
//! Candidates are taken in ascending price order (stable, so equal prices
//! keep catalog order) until their combined area reaches the required area.
//!
//! # Complexity
//!
//! O(n log n) where n = number of candidate listings.
//!
//! # Approximation
//!
//! Ordering is by listing price, not by price per unit area. Several cheap
//! small listings can be chosen where one larger listing would cost less in
//! total, so the result is not guaranteed to be the minimum-cost cover.

use tracing::trace;

use super::{Allocation, AllocationPolicy, Selection};
use crate::models::Listing;

/// Policy object for [`allocate_cheapest_first`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheapestFirst;

impl AllocationPolicy for CheapestFirst {
    fn allocate(&self, required_area: u64, listings: &[&Listing]) -> Allocation {
        allocate_cheapest_first(required_area, listings.iter().copied())
    }
}

/// Selects listings in ascending price order until `required_area` is covered.
///
/// Returns [`Allocation::Infeasible`] if all candidates together cover less
/// than `required_area`. A required area of zero is covered by an empty
/// selection.
///
/// # Examples
///
/// ```
/// use u_storage::models::Listing;
/// use u_storage::allocation::allocate_cheapest_first;
///
/// let listings = vec![
///     Listing::new("a", "loc", 20, 30, 100),
///     Listing::new("b", "loc", 20, 20, 80),
///     Listing::new("c", "loc", 20, 50, 200),
/// ];
/// let allocation = allocate_cheapest_first(1000, &listings);
/// let selection = allocation.selection().unwrap();
/// assert_eq!(selection.listing_ids(), ["b", "a"]);
/// assert_eq!(selection.total_price(), 180);
/// ```
pub fn allocate_cheapest_first<'a, I>(required_area: u64, listings: I) -> Allocation
where
    I: IntoIterator<Item = &'a Listing>,
{
    let mut ordered: Vec<&Listing> = listings.into_iter().collect();
    ordered.sort_by_key(|l| l.price());

    let mut selection = Selection::new();
    for listing in ordered {
        if selection.covered_area() >= required_area {
            break;
        }
        selection.push(listing);
    }

    if selection.covered_area() < required_area {
        trace!(
            required_area,
            available_area = selection.covered_area(),
            "candidates cannot cover required area"
        );
        return Allocation::Infeasible;
    }

    Allocation::Covered(selection)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(allocation: &Allocation) -> Vec<&str> {
        allocation
            .selection()
            .expect("covered")
            .listing_ids()
            .iter()
            .map(String::as_str)
            .collect()
    }

    #[test]
    fn test_single_listing_exactly_covers() {
        let listings = vec![
            Listing::new("1", "1", 20, 30, 100),
            Listing::new("4", "1", 20, 40, 100),
        ];
        let a = allocate_cheapest_first(600, &listings);
        assert_eq!(ids(&a), vec!["1"]);
        assert_eq!(a.selection().unwrap().total_price(), 100);
    }

    #[test]
    fn test_accumulates_in_price_order() {
        let listings = vec![
            Listing::new("a", "l", 20, 30, 100),
            Listing::new("b", "l", 20, 20, 80),
            Listing::new("c", "l", 20, 50, 200),
        ];
        let a = allocate_cheapest_first(1000, &listings);
        assert_eq!(ids(&a), vec!["b", "a"]);
        let s = a.selection().unwrap();
        assert_eq!(s.total_price(), 180);
        assert_eq!(s.covered_area(), 1000);
    }

    #[test]
    fn test_infeasible_when_total_area_too_small() {
        let listings = vec![Listing::new("1", "1", 30, 15, 120)];
        assert_eq!(allocate_cheapest_first(500, &listings), Allocation::Infeasible);
    }

    #[test]
    fn test_zero_area_is_empty_cover() {
        let listings = vec![Listing::new("1", "1", 30, 15, 120)];
        let a = allocate_cheapest_first(0, &listings);
        let s = a.selection().unwrap();
        assert!(s.is_empty());
        assert_eq!(s.total_price(), 0);
    }

    #[test]
    fn test_no_candidates() {
        assert_eq!(
            allocate_cheapest_first(1, std::iter::empty()),
            Allocation::Infeasible
        );
        assert!(allocate_cheapest_first(0, std::iter::empty()).is_covered());
    }

    #[test]
    fn test_price_ties_keep_catalog_order() {
        let listings = vec![
            Listing::new("x", "l", 10, 10, 50),
            Listing::new("y", "l", 10, 10, 50),
            Listing::new("z", "l", 10, 10, 50),
        ];
        let a = allocate_cheapest_first(150, &listings);
        assert_eq!(ids(&a), vec!["x", "y"]);
    }

    #[test]
    fn test_cheap_small_listings_beat_large_one() {
        // "big" alone covers for 60, but price order picks s1 and s2 for 85.
        let listings = vec![
            Listing::new("big", "l", 100, 10, 60),
            Listing::new("s1", "l", 10, 10, 40),
            Listing::new("s2", "l", 10, 10, 45),
        ];
        let a = allocate_cheapest_first(150, &listings);
        assert_eq!(ids(&a), vec!["s1", "s2"]);
        assert_eq!(a.selection().unwrap().total_price(), 85);
    }

    #[test]
    fn test_free_listing_covers() {
        let listings = vec![Listing::new("free", "l", 20, 20, 0)];
        let a = allocate_cheapest_first(400, &listings);
        assert_eq!(ids(&a), vec!["free"]);
        assert_eq!(a.selection().unwrap().total_price(), 0);
    }

    #[test]
    fn test_policy_object() {
        let listings = [
            Listing::new("a", "l", 20, 30, 100),
            Listing::new("b", "l", 20, 20, 80),
        ];
        let refs: Vec<&Listing> = listings.iter().collect();
        let a = CheapestFirst.allocate(400, &refs);
        assert_eq!(ids(&a), vec!["b"]);
    }
}
