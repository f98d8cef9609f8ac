//! Consistency checking of solver output.
//!
//! Provides [`ResultValidator`] for checking location results against the
//! catalog and fleet they were computed from.

mod validator;

pub use validator::{ResultValidator, Violation, ViolationType};
