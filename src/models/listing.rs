//! Storage listing type.

use serde::{Deserialize, Serialize};

/// One rentable storage unit at a location.
///
/// Prices are integers in the minor currency unit (cents).
///
/// # Examples
///
/// ```
/// use u_storage::models::Listing;
///
/// let l = Listing::new("a", "loc-1", 20, 30, 100);
/// assert_eq!(l.id(), "a");
/// assert_eq!(l.location_id(), "loc-1");
/// assert_eq!(l.area(), 600);
/// assert_eq!(l.price(), 100);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Listing {
    id: String,
    location_id: String,
    length: u64,
    width: u64,
    #[serde(rename = "price_in_cents")]
    price: u64,
}

impl Listing {
    /// Creates a listing.
    pub fn new(
        id: impl Into<String>,
        location_id: impl Into<String>,
        length: u64,
        width: u64,
        price: u64,
    ) -> Self {
        Self {
            id: id.into(),
            location_id: location_id.into(),
            length,
            width,
            price,
        }
    }

    /// Catalog-unique listing ID.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Location this listing belongs to.
    pub fn location_id(&self) -> &str {
        &self.location_id
    }

    /// Length of the unit.
    pub fn length(&self) -> u64 {
        self.length
    }

    /// Width of the unit.
    pub fn width(&self) -> u64 {
        self.width
    }

    /// Price in cents.
    pub fn price(&self) -> u64 {
        self.price
    }

    /// `length * width`.
    pub fn area(&self) -> u64 {
        self.length.saturating_mul(self.width)
    }
}
