use thiserror::Error;

/// Reasons a predictor call produced no usable score.
///
/// These never escape [`crate::PredictorClient::predict`]; they are logged and
/// folded into [`crate::Prediction::Unavailable`].
#[derive(Debug, Error)]
pub enum PredictorError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),

    #[error("predictor returned a non-finite score")]
    NonFiniteScore,

    #[error("invalid predictor URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}
