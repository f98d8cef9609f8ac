//! # u-storage
//!
//! Multi-vehicle storage allocation: finds every location whose listings can
//! together hold a whole fleet, picks a cheap covering subset of listings per
//! location, and ranks locations by total price.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (VehicleClass, Fleet, Listing, LocationResult)
//! - [`allocation`] — Per-location area allocation (cheapest-listing-first greedy)
//! - [`solver`] — Grouping by location and ranking of feasible locations
//! - [`evaluation`] — Consistency checks of solver output
//! - [`catalog`] — JSON catalog loading and seeded catalog generation
//! - [`request`] — Request parsing, validation, and response rendering
//! - [`config`] — Solver configuration (vehicle width)
//!
//! Allocation compares aggregate area only; it does not check whether each
//! vehicle geometrically fits inside an individual listing.

pub mod allocation;
pub mod catalog;
pub mod config;
pub mod evaluation;
pub mod models;
pub mod request;
pub mod solver;

mod error;

pub use error::{Error, Result};
pub use solver::solve;
