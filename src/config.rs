//! Solver configuration.

use serde::Deserialize;
use thiserror::Error;

use crate::models::DEFAULT_VEHICLE_WIDTH;

/// Errors from loading a [`SolverConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("vehicle width must be positive")]
    ZeroVehicleWidth,
}

/// Process-wide settings for building fleets from requests.
///
/// # Examples
///
/// ```
/// use u_storage::config::SolverConfig;
///
/// let config = SolverConfig::default();
/// assert_eq!(config.vehicle_width(), 10);
///
/// let config = SolverConfig::from_json_str(r#"{"vehicle_width": 8}"#).unwrap();
/// assert_eq!(config.vehicle_width(), 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolverConfig {
    vehicle_width: u64,
}

impl SolverConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the width shared by every vehicle.
    pub fn with_vehicle_width(mut self, width: u64) -> Self {
        self.vehicle_width = width;
        self
    }

    /// Parses a JSON configuration; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the configuration for unusable values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.vehicle_width == 0 {
            return Err(ConfigError::ZeroVehicleWidth);
        }
        Ok(())
    }

    /// Width shared by every vehicle.
    pub fn vehicle_width(&self) -> u64 {
        self.vehicle_width
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            vehicle_width: DEFAULT_VEHICLE_WIDTH,
        }
    }
}
