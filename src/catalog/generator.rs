//! Seeded synthetic catalog generation.
//!
//! Produces valid catalogs (positive dimensions, unique IDs) for tests and
//! benchmarks. The same configuration always yields the same catalog.

use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::Catalog;
use crate::models::Listing;

/// Parameters for [`CatalogGenerator`].
///
/// # Examples
///
/// ```
/// use u_storage::catalog::{CatalogGenerator, GeneratorConfig};
///
/// let config = GeneratorConfig::default()
///     .with_num_locations(5)
///     .with_listings_per_location(1..=3)
///     .with_seed(7);
/// let catalog = CatalogGenerator::new(config).generate();
/// assert_eq!(catalog.num_locations(), 5);
/// assert!(catalog.len() >= 5 && catalog.len() <= 15);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    num_locations: usize,
    listings_per_location: RangeInclusive<usize>,
    length: RangeInclusive<u64>,
    width: RangeInclusive<u64>,
    price: RangeInclusive<u64>,
    seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            num_locations: 10,
            listings_per_location: 1..=5,
            length: 10..=50,
            width: 10..=40,
            price: 0..=50_000,
            seed: 42,
        }
    }
}

impl GeneratorConfig {
    /// Sets the number of locations.
    pub fn with_num_locations(mut self, n: usize) -> Self {
        self.num_locations = n;
        self
    }

    /// Sets how many listings each location gets. Zero is raised to one.
    pub fn with_listings_per_location(mut self, range: RangeInclusive<usize>) -> Self {
        let (lo, hi) = range.into_inner();
        self.listings_per_location = lo.max(1)..=hi.max(lo.max(1));
        self
    }

    /// Sets the listing length range. Zero is raised to one.
    pub fn with_length(mut self, range: RangeInclusive<u64>) -> Self {
        self.length = positive(range);
        self
    }

    /// Sets the listing width range. Zero is raised to one.
    pub fn with_width(mut self, range: RangeInclusive<u64>) -> Self {
        self.width = positive(range);
        self
    }

    /// Sets the price range in cents.
    pub fn with_price(mut self, range: RangeInclusive<u64>) -> Self {
        let (lo, hi) = range.into_inner();
        self.price = lo..=hi.max(lo);
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Number of locations to generate.
    pub fn num_locations(&self) -> usize {
        self.num_locations
    }

    /// RNG seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

fn positive(range: RangeInclusive<u64>) -> RangeInclusive<u64> {
    let (lo, hi) = range.into_inner();
    let lo = lo.max(1);
    lo..=hi.max(lo)
}

/// Generates listing catalogs from a [`GeneratorConfig`].
pub struct CatalogGenerator {
    config: GeneratorConfig,
    rng: StdRng,
}

impl CatalogGenerator {
    /// Creates a generator seeded from `config`.
    pub fn new(config: GeneratorConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self { config, rng }
    }

    /// Draws a catalog. Location IDs are `loc-<n>`, listing IDs are
    /// sequential across the catalog.
    pub fn generate(&mut self) -> Catalog {
        let mut listings = Vec::new();
        for loc in 0..self.config.num_locations {
            let count = self
                .rng
                .random_range(self.config.listings_per_location.clone());
            for _ in 0..count {
                let id = listings.len().to_string();
                listings.push(Listing::new(
                    id,
                    format!("loc-{loc}"),
                    self.rng.random_range(self.config.length.clone()),
                    self.rng.random_range(self.config.width.clone()),
                    self.rng.random_range(self.config.price.clone()),
                ));
            }
        }
        Catalog { listings }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_deterministic() {
        let config = GeneratorConfig::default().with_seed(3);
        let a = CatalogGenerator::new(config.clone()).generate();
        let b = CatalogGenerator::new(config).generate();
        assert_eq!(a, b);
    }

    #[test]
    fn test_generator_respects_ranges() {
        let config = GeneratorConfig::default()
            .with_num_locations(20)
            .with_length(5..=6)
            .with_width(0..=2)
            .with_price(100..=200);
        let catalog = CatalogGenerator::new(config).generate();
        assert_eq!(catalog.num_locations(), 20);
        for l in catalog.listings() {
            assert!((5..=6).contains(&l.length()));
            assert!((1..=2).contains(&l.width()));
            assert!((100..=200).contains(&l.price()));
        }
    }

    #[test]
    fn test_generated_catalog_is_valid() {
        let catalog = CatalogGenerator::new(GeneratorConfig::default()).generate();
        let revalidated = Catalog::from_listings(catalog.listings().to_vec()).unwrap();
        assert_eq!(revalidated, catalog);
    }

    #[test]
    fn test_generator_zero_listings_raised() {
        let config = GeneratorConfig::default()
            .with_num_locations(4)
            .with_listings_per_location(0..=0);
        let catalog = CatalogGenerator::new(config).generate();
        assert_eq!(catalog.len(), 4);
    }
}
