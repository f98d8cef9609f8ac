//! Location-level orchestration.
//!
//! - [`group_by_location`] — partitions a catalog by location, O(n)
//! - [`StorageSolver`] — allocates every location and ranks feasible ones by price

mod grouping;
mod storage;

pub use grouping::{group_by_location, LocationGroup};
pub use storage::{solve, StorageSolver};
