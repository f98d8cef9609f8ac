//! Allocation outcome types and the policy seam.

use crate::models::Listing;

/// Listings chosen to cover a required area at one location.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    listing_ids: Vec<String>,
    total_price: u64,
    covered_area: u64,
}

impl Selection {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a listing, accumulating its price and area.
    pub fn push(&mut self, listing: &Listing) {
        self.listing_ids.push(listing.id().to_string());
        self.total_price = self.total_price.saturating_add(listing.price());
        self.covered_area = self.covered_area.saturating_add(listing.area());
    }

    /// Selected IDs in selection order.
    pub fn listing_ids(&self) -> &[String] {
        &self.listing_ids
    }

    /// Consumes the selection, returning its IDs.
    pub fn into_listing_ids(self) -> Vec<String> {
        self.listing_ids
    }

    /// Sum of the selected listings' prices.
    pub fn total_price(&self) -> u64 {
        self.total_price
    }

    /// Combined area of the selected listings.
    pub fn covered_area(&self) -> u64 {
        self.covered_area
    }

    /// Number of selected listings.
    pub fn len(&self) -> usize {
        self.listing_ids.len()
    }

    /// Returns `true` if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.listing_ids.is_empty()
    }
}

/// Result of allocating one location.
///
/// Infeasibility is an ordinary outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Allocation {
    /// The selection's area covers the required area.
    Covered(Selection),
    /// Every candidate together is still too small.
    Infeasible,
}

impl Allocation {
    /// Returns `true` for [`Allocation::Covered`].
    pub fn is_covered(&self) -> bool {
        matches!(self, Allocation::Covered(_))
    }

    /// The covering selection, if any.
    pub fn selection(&self) -> Option<&Selection> {
        match self {
            Allocation::Covered(s) => Some(s),
            Allocation::Infeasible => None,
        }
    }

    /// Consumes the allocation, returning the covering selection, if any.
    pub fn into_selection(self) -> Option<Selection> {
        match self {
            Allocation::Covered(s) => Some(s),
            Allocation::Infeasible => None,
        }
    }
}

/// Chooses listings from one location's candidates to cover an area.
///
/// `listings` all share a location and arrive in catalog order.
pub trait AllocationPolicy {
    fn allocate(&self, required_area: u64, listings: &[&Listing]) -> Allocation;
}
