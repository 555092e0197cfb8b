//! Client for the remote occupancy predictor.
//!
//! The predictor is an opaque HTTP service returning a base occupancy score
//! for a day/hour/weekend context. Any failure degrades to
//! [`Prediction::Unavailable`], which [`Prediction::base_score`] turns into
//! the fixed fallback score.

pub mod client;
pub mod error;
pub mod prediction;

pub use client::PredictorClient;
pub use error::PredictorError;
pub use prediction::{Prediction, FALLBACK_BASE_SCORE};
