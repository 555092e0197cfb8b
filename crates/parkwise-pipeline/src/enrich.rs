//! Occupancy enrichment.

use parkwise_core::{EnrichedSpot, NormalizedSpot, RequestContext, SpotCategory};
use parkwise_predictor::Prediction;

/// Added to hotel parking occupancy on weekends.
pub const HOTEL_WEEKEND_BOOST: f64 = 20.0;

/// Applies the per-category adjustment to a base score.
#[must_use]
pub fn adjusted_score(base: f64, category: SpotCategory, ctx: RequestContext) -> f64 {
    if category == SpotCategory::HotelParking && ctx.is_weekend {
        base + HOTEL_WEEKEND_BOOST
    } else {
        base
    }
}

/// Clamps a score to `[0, 100]` and rounds to the nearest whole percent.
#[must_use]
pub fn to_percent(score: f64) -> u8 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let percent = score.clamp(0.0, 100.0).round() as u8;
    percent
}

/// Attaches an occupancy percentage to every spot, preserving order.
///
/// The prediction is resolved to a base score once (falling back when
/// unavailable) and shared by all spots of the request.
#[must_use]
pub fn enrich(
    spots: Vec<NormalizedSpot>,
    prediction: Prediction,
    ctx: RequestContext,
) -> Vec<EnrichedSpot> {
    let base = prediction.base_score();
    if !prediction.is_available() {
        tracing::debug!(base, "enriching with fallback base score");
    }

    spots
        .into_iter()
        .map(|spot| {
            let occupancy_percent = to_percent(adjusted_score(base, spot.category, ctx));
            EnrichedSpot {
                spot,
                occupancy_percent,
            }
        })
        .collect()
}
