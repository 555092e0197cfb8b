use parkwise_core::ConfigError;
use parkwise_overpass::OverpassError;
use parkwise_predictor::PredictorError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    /// The geo source failed; there is no sensible default to substitute.
    #[error("geo data source failed: {0}")]
    Geo(#[from] OverpassError),

    /// Live mode requires the caller's coordinates.
    #[error("user coordinates are required when querying live geo data")]
    MissingOrigin,

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("predictor client setup failed: {0}")]
    Predictor(#[from] PredictorError),
}
