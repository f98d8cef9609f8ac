//! Result validator that checks allocation results against the catalog.

use std::collections::HashMap;

use crate::models::{Fleet, Listing, LocationResult};

/// A type of inconsistency in a location result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationType {
    /// A selected listing belongs to another location.
    ForeignListing {
        /// Listing ID.
        listing_id: String,
        /// Location the listing actually belongs to.
        actual_location: String,
    },
    /// A selected ID is not in the catalog.
    UnknownListing {
        /// Listing ID.
        listing_id: String,
    },
    /// Selected area falls short of the fleet's required area.
    InsufficientArea {
        /// Combined area of the selected listings.
        covered: u64,
        /// Fleet requirement.
        required: u64,
    },
    /// Reported price differs from the sum of listing prices.
    PriceMismatch {
        /// Price in the result.
        reported: u64,
        /// Sum over the selected listings.
        actual: u64,
    },
    /// A result is cheaper than the one ranked before it.
    OrderViolated {
        /// Index of the out-of-order result.
        index: usize,
    },
}

/// An inconsistency found in a result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Location of the offending result.
    pub location_id: String,
    /// The type of violation.
    pub kind: ViolationType,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(location_id: impl Into<String>, kind: ViolationType) -> Self {
        Self {
            location_id: location_id.into(),
            kind,
        }
    }
}

/// Checks location results for grouping, coverage, price, and ordering.
///
/// # Examples
///
/// ```
/// use u_storage::models::{Fleet, Listing};
/// use u_storage::evaluation::ResultValidator;
/// use u_storage::solver::solve;
///
/// let listings = vec![
///     Listing::new("a", "1", 20, 30, 100),
///     Listing::new("b", "1", 20, 20, 80),
/// ];
/// let fleet = Fleet::new(10).with_class(20, 5);
/// let results = solve(&fleet, &listings);
///
/// let validator = ResultValidator::new(&fleet, &listings);
/// assert!(validator.validate_all(&results).is_empty());
/// ```
pub struct ResultValidator<'a> {
    required_area: u64,
    by_id: HashMap<&'a str, &'a Listing>,
}

impl<'a> ResultValidator<'a> {
    /// Creates a validator for results of solving `fleet` over `listings`.
    pub fn new(fleet: &Fleet, listings: &'a [Listing]) -> Self {
        Self {
            required_area: fleet.required_area(),
            by_id: listings.iter().map(|l| (l.id(), l)).collect(),
        }
    }

    /// Fleet requirement the results are checked against.
    pub fn required_area(&self) -> u64 {
        self.required_area
    }

    /// Validates one result. An empty list means it is consistent.
    pub fn validate(&self, result: &LocationResult) -> Vec<Violation> {
        let mut violations = Vec::new();
        let location = result.location_id();
        let mut covered: u64 = 0;
        let mut price: u64 = 0;

        for id in result.listing_ids() {
            let Some(listing) = self.by_id.get(id.as_str()) else {
                violations.push(Violation::new(
                    location,
                    ViolationType::UnknownListing {
                        listing_id: id.clone(),
                    },
                ));
                continue;
            };
            if listing.location_id() != location {
                violations.push(Violation::new(
                    location,
                    ViolationType::ForeignListing {
                        listing_id: id.clone(),
                        actual_location: listing.location_id().to_string(),
                    },
                ));
            }
            covered = covered.saturating_add(listing.area());
            price = price.saturating_add(listing.price());
        }

        if covered < self.required_area {
            violations.push(Violation::new(
                location,
                ViolationType::InsufficientArea {
                    covered,
                    required: self.required_area,
                },
            ));
        }

        if price != result.total_price() {
            violations.push(Violation::new(
                location,
                ViolationType::PriceMismatch {
                    reported: result.total_price(),
                    actual: price,
                },
            ));
        }

        violations
    }

    /// Validates every result and their price ordering.
    pub fn validate_all(&self, results: &[LocationResult]) -> Vec<Violation> {
        let mut violations: Vec<Violation> =
            results.iter().flat_map(|r| self.validate(r)).collect();

        for (index, pair) in results.windows(2).enumerate() {
            if pair[1].total_price() < pair[0].total_price() {
                violations.push(Violation::new(
                    pair[1].location_id(),
                    ViolationType::OrderViolated { index: index + 1 },
                ));
            }
        }

        violations
    }
}
