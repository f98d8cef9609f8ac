//! Crate-level error type for the boundary layers.
//!
//! The allocation core never fails; these errors come from loading
//! catalogs, configuration, and requests.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::request::RequestError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("request rejected: {0}")]
    Request(#[from] RequestError),

    #[error("response encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
