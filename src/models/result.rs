//! Per-location allocation result.

use serde::{Deserialize, Serialize};

/// A feasible covering selection of listings at one location.
///
/// Serializes as `{location_id, listing_ids, total_price_in_cents}`.
///
/// # Examples
///
/// ```
/// use u_storage::models::LocationResult;
///
/// let r = LocationResult::new("1", vec!["1".to_string()], 100);
/// assert_eq!(r.location_id(), "1");
/// assert_eq!(r.listing_ids(), ["1"]);
/// assert_eq!(r.total_price(), 100);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationResult {
    location_id: String,
    listing_ids: Vec<String>,
    #[serde(rename = "total_price_in_cents")]
    total_price: u64,
}

impl LocationResult {
    /// Creates a result.
    pub fn new(location_id: impl Into<String>, listing_ids: Vec<String>, total_price: u64) -> Self {
        Self {
            location_id: location_id.into(),
            listing_ids,
            total_price,
        }
    }

    /// Location all selected listings belong to.
    pub fn location_id(&self) -> &str {
        &self.location_id
    }

    /// Selected listing IDs in selection order.
    pub fn listing_ids(&self) -> &[String] {
        &self.listing_ids
    }

    /// Exact sum of the selected listings' prices.
    pub fn total_price(&self) -> u64 {
        self.total_price
    }
}
