//! Request boundary: fleet descriptions in, ranked locations out.
//!
//! Request bodies are JSON arrays of `{length, quantity}`. Vehicle width is
//! not part of the request; it comes from [`SolverConfig`]. Responses are
//! JSON arrays of `{location_id, listing_ids, total_price_in_cents}`.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::catalog::Catalog;
use crate::config::SolverConfig;
use crate::models::{Fleet, LocationResult};
use crate::solver::solve;

/// Reasons a request is rejected before solving.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("malformed request body: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("vehicle {index} has zero length")]
    ZeroLength { index: usize },

    #[error("vehicle {index} has zero quantity")]
    ZeroQuantity { index: usize },
}

/// One vehicle class as submitted by a caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleRequest {
    pub length: u64,
    pub quantity: u64,
}

/// A fleet as submitted by a caller.
///
/// # Examples
///
/// ```
/// use u_storage::config::SolverConfig;
/// use u_storage::request::FleetRequest;
///
/// let request = FleetRequest::from_json_str(r#"[{"length": 20, "quantity": 3}]"#).unwrap();
/// let fleet = request.into_fleet(&SolverConfig::default()).unwrap();
/// assert_eq!(fleet.required_area(), 600);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FleetRequest {
    pub vehicles: Vec<VehicleRequest>,
}

impl FleetRequest {
    pub fn new(vehicles: Vec<VehicleRequest>) -> Self {
        Self { vehicles }
    }

    pub fn from_json_str(json: &str) -> Result<Self, RequestError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validates the request and builds a fleet of `config` width.
    ///
    /// Every vehicle needs a positive length and quantity.
    pub fn into_fleet(self, config: &SolverConfig) -> Result<Fleet, RequestError> {
        let mut fleet = Fleet::new(config.vehicle_width());
        for (index, v) in self.vehicles.into_iter().enumerate() {
            if v.length == 0 {
                return Err(RequestError::ZeroLength { index });
            }
            if v.quantity == 0 {
                return Err(RequestError::ZeroQuantity { index });
            }
            fleet.push(v.length, v.quantity);
        }
        Ok(fleet)
    }
}

/// Renders results as the JSON response body.
pub fn render(results: &[LocationResult]) -> Result<String, serde_json::Error> {
    serde_json::to_string(results)
}

/// Parses a request body, solves it against `catalog`, and renders the response.
///
/// An unsatisfiable fleet yields `[]`, not an error.
///
/// # Examples
///
/// ```
/// use u_storage::catalog::Catalog;
/// use u_storage::config::SolverConfig;
/// use u_storage::request::handle;
///
/// let catalog = Catalog::from_json_str(
///     r#"[{"id": "1", "location_id": "1", "length": 20, "width": 30, "price_in_cents": 100}]"#,
/// ).unwrap();
/// let body = handle(r#"[{"length": 20, "quantity": 3}]"#, &catalog, &SolverConfig::default()).unwrap();
/// assert_eq!(body, r#"[{"location_id":"1","listing_ids":["1"],"total_price_in_cents":100}]"#);
/// ```
pub fn handle(body: &str, catalog: &Catalog, config: &SolverConfig) -> crate::Result<String> {
    let fleet = FleetRequest::from_json_str(body)?.into_fleet(config)?;
    let results = solve(&fleet, catalog.listings());
    debug!(
        vehicles = fleet.num_vehicles(),
        feasible = results.len(),
        "handled storage request"
    );
    Ok(render(&results)?)
}
