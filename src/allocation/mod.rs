//! Per-location area allocation.
//!
//! - [`allocate_cheapest_first`] — price-ascending greedy cover, O(n log n)
//!
//! Policies implement [`AllocationPolicy`] and return an [`Allocation`],
//! which is either a covering [`Selection`] or [`Allocation::Infeasible`].

mod cheapest_first;
mod selection;

pub use cheapest_first::{allocate_cheapest_first, CheapestFirst};
pub use selection::{Allocation, AllocationPolicy, Selection};
