//! Listing catalog loading and generation.
//!
//! - [`Catalog`] — validated listings loaded from JSON
//! - [`CatalogGenerator`] — seeded synthetic catalogs

mod generator;
mod loader;

pub use generator::{CatalogGenerator, GeneratorConfig};
pub use loader::{Catalog, CatalogError};
