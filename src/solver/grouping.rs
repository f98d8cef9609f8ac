//! Partitioning a listing catalog by location.

use std::collections::HashMap;

use crate::models::Listing;

/// Listings of one location, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationGroup<'a> {
    location_id: &'a str,
    listings: Vec<&'a Listing>,
}

impl<'a> LocationGroup<'a> {
    pub fn location_id(&self) -> &'a str {
        self.location_id
    }

    pub fn listings(&self) -> &[&'a Listing] {
        &self.listings
    }

    /// Combined area of every listing in the group.
    pub fn total_area(&self) -> u64 {
        self.listings
            .iter()
            .fold(0u64, |acc, l| acc.saturating_add(l.area()))
    }
}

/// Groups listings by `location_id`.
///
/// Groups appear in first-seen order; listings keep catalog order within
/// their group. Runs in O(n).
///
/// # Examples
///
/// ```
/// use u_storage::models::Listing;
/// use u_storage::solver::group_by_location;
///
/// let listings = vec![
///     Listing::new("1", "b", 10, 10, 5),
///     Listing::new("2", "a", 10, 10, 5),
///     Listing::new("3", "b", 10, 10, 5),
/// ];
/// let groups = group_by_location(&listings);
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups[0].location_id(), "b");
/// assert_eq!(groups[0].listings().len(), 2);
/// ```
pub fn group_by_location(listings: &[Listing]) -> Vec<LocationGroup<'_>> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<LocationGroup<'_>> = Vec::new();

    for listing in listings {
        let slot = *index.entry(listing.location_id()).or_insert_with(|| {
            groups.push(LocationGroup {
                location_id: listing.location_id(),
                listings: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].listings.push(listing);
    }

    groups
}
