//! Domain model types for fleet storage allocation.
//!
//! Provides the plain value types the solver works on: vehicle classes
//! grouped into a fleet, storage listings tied to a location, and the
//! per-location result of an allocation.

mod listing;
mod result;
mod vehicle;

pub use listing::Listing;
pub use result::LocationResult;
pub use vehicle::{Fleet, VehicleClass, DEFAULT_VEHICLE_WIDTH};
