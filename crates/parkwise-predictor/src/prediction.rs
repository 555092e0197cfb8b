//! Predictor outcome and the fallback merge step.

/// Base occupancy used whenever the predictor cannot be reached.
pub const FALLBACK_BASE_SCORE: f64 = 50.0;

/// Outcome of one predictor call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Prediction {
    /// Score returned by the predictor, before any category adjustment.
    Score(f64),
    Unavailable,
}

impl Prediction {
    /// The base score to enrich spots with: the predicted score, or
    /// [`FALLBACK_BASE_SCORE`] when unavailable.
    #[must_use]
    pub fn base_score(self) -> f64 {
        match self {
            Prediction::Score(score) => score,
            Prediction::Unavailable => FALLBACK_BASE_SCORE,
        }
    }

    #[must_use]
    pub fn is_available(self) -> bool {
        matches!(self, Prediction::Score(_))
    }
}
