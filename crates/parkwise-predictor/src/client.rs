//! HTTP client for the occupancy predictor's `/predict` endpoint.

use std::time::Duration;

use parkwise_core::RequestContext;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

use crate::error::PredictorError;
use crate::prediction::Prediction;

/// Wire request. `is_weekend` is sent as `0`/`1`, the feature encoding the
/// model was trained on.
#[derive(Debug, Serialize)]
struct PredictRequest {
    day_of_week: u8,
    hour: u8,
    is_weekend: u8,
}

impl From<RequestContext> for PredictRequest {
    fn from(ctx: RequestContext) -> Self {
        Self {
            day_of_week: ctx.day_of_week,
            hour: ctx.hour,
            is_weekend: u8::from(ctx.is_weekend),
        }
    }
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    occupancy_score: f64,
}

/// Client for the occupancy predictor.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct PredictorClient {
    client: Client,
    url: Url,
}

impl PredictorClient {
    /// Creates a client posting to `url` with a hard per-call timeout.
    ///
    /// # Errors
    ///
    /// Returns [`PredictorError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`PredictorError::InvalidUrl`] if `url`
    /// does not parse.
    pub fn new(url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, PredictorError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(timeout_secs.min(10)))
            .user_agent(user_agent)
            .build()?;

        let url = Url::parse(url).map_err(|e| PredictorError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, url })
    }

    /// Asks the predictor for a base occupancy score.
    ///
    /// Never fails: any error is logged and reported as
    /// [`Prediction::Unavailable`].
    pub async fn predict(&self, ctx: RequestContext) -> Prediction {
        match self.request_score(ctx).await {
            Ok(score) => {
                tracing::debug!(score, "predictor returned occupancy score");
                Prediction::Score(score)
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    day_of_week = ctx.day_of_week,
                    hour = ctx.hour,
                    "occupancy predictor unavailable; using fallback score"
                );
                Prediction::Unavailable
            }
        }
    }

    /// Sends one request and extracts `occupancy_score`.
    ///
    /// # Errors
    ///
    /// - [`PredictorError::Http`] on network failure, timeout or non-2xx status.
    /// - [`PredictorError::Deserialize`] if the body lacks a numeric score.
    /// - [`PredictorError::NonFiniteScore`] if the score is NaN or infinite.
    pub async fn request_score(&self, ctx: RequestContext) -> Result<f64, PredictorError> {
        let response = self
            .client
            .post(self.url.clone())
            .json(&PredictRequest::from(ctx))
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;
        let parsed: PredictResponse = serde_json::from_str(&body)?;

        if !parsed.occupancy_score.is_finite() {
            return Err(PredictorError::NonFiniteScore);
        }
        Ok(parsed.occupancy_score)
    }
}
