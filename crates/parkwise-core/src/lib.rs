//! Shared domain types and configuration for parkwise.

mod app_config;
mod catalog;
mod config;
pub mod spots;

pub use app_config::{AppConfig, Environment, GeoSourceMode};
pub use catalog::{load_catalog, CatalogFile};
pub use config::{load_app_config, load_app_config_from_env};
pub use spots::{
    Coordinates, EnrichedSpot, NormalizedSpot, PointOfInterest, RequestContext, Spot,
    SpotCategory, SpotStatus,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("day of week must be 0-6, got {0}")]
    InvalidDayOfWeek(u8),

    #[error("hour must be 0-23, got {0}")]
    InvalidHour(u8),

    #[error("invalid coordinates ({lat}, {lng}): {reason}")]
    InvalidCoordinates { lat: f64, lng: f64, reason: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read catalog file {path}: {source}")]
    CatalogFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog file: {0}")]
    CatalogFileParse(#[from] serde_yaml::Error),

    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),
}
