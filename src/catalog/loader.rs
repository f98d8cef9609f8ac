//! Validated listing catalog and its JSON loader.

use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::models::Listing;

/// Errors from loading or validating a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate listing id: {0}")]
    DuplicateId(String),

    #[error("listing {id} has invalid dimensions {length}x{width}")]
    InvalidDimensions { id: String, length: u64, width: u64 },
}

/// A listing sequence checked for positive dimensions and unique IDs.
///
/// The catalog file is a JSON array of
/// `{id, location_id, length, width, price_in_cents}` records.
///
/// # Examples
///
/// ```
/// use u_storage::catalog::Catalog;
///
/// let json = r#"[
///     {"id": "1", "location_id": "a", "length": 20, "width": 30, "price_in_cents": 100},
///     {"id": "2", "location_id": "b", "length": 10, "width": 10, "price_in_cents": 25}
/// ]"#;
/// let catalog = Catalog::from_json_str(json).unwrap();
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.listings()[1].price(), 25);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub(super) listings: Vec<Listing>,
}

impl Catalog {
    /// Validates and wraps listings, keeping their order.
    pub fn from_listings(listings: Vec<Listing>) -> Result<Self, CatalogError> {
        validate(&listings)?;
        Ok(Self { listings })
    }

    /// Parses a JSON catalog.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let listings: Vec<Listing> = serde_json::from_str(json)?;
        Self::from_listings(listings)
    }

    /// Parses a JSON catalog from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let listings: Vec<Listing> = serde_json::from_reader(reader)?;
        Self::from_listings(listings)
    }

    /// Loads a JSON catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_reader(BufReader::new(file))?;
        debug!(path = %path.display(), listings = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    /// Listings in file order.
    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Number of distinct locations.
    pub fn num_locations(&self) -> usize {
        self.listings
            .iter()
            .map(|l| l.location_id())
            .collect::<HashSet<_>>()
            .len()
    }

    /// Consumes the catalog, returning its listings.
    pub fn into_listings(self) -> Vec<Listing> {
        self.listings
    }
}

fn validate(listings: &[Listing]) -> Result<(), CatalogError> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(listings.len());
    for listing in listings {
        if listing.length() == 0 || listing.width() == 0 {
            return Err(CatalogError::InvalidDimensions {
                id: listing.id().to_string(),
                length: listing.length(),
                width: listing.width(),
            });
        }
        if !seen.insert(listing.id()) {
            return Err(CatalogError::DuplicateId(listing.id().to_string()));
        }
    }
    Ok(())
}
