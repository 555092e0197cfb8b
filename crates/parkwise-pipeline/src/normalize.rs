//! Raw point-of-interest normalization.
//!
//! Classification is a total function: tags are matched against a fixed,
//! ordered rule list and anything unmatched falls through to
//! [`SpotCategory::Public`].

use parkwise_core::{Coordinates, NormalizedSpot, PointOfInterest, SpotCategory};

/// Sentinel id of the synthetic fallback spot.
pub const FALLBACK_SPOT_ID: i64 = 0;
pub const FALLBACK_SPOT_NAME: &str = "General Public Parking Area";
/// Offset (degrees, on both axes) of the fallback spot from the user.
const FALLBACK_OFFSET_DEG: f64 = 0.001;

struct CategoryRule {
    category: SpotCategory,
    /// Matches when any `(key, value)` tag pair is present.
    tags: &'static [(&'static str, &'static str)],
}

/// Ordered classification rules; the first match wins.
const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        category: SpotCategory::GarageService,
        tags: &[("shop", "car_repair"), ("amenity", "fuel")],
    },
    CategoryRule {
        category: SpotCategory::HotelParking,
        tags: &[("tourism", "hotel"), ("tourism", "guest_house")],
    },
    CategoryRule {
        category: SpotCategory::MallParking,
        tags: &[("shop", "mall")],
    },
];

/// Assigns exactly one category to a point of interest.
#[must_use]
pub fn classify(poi: &PointOfInterest) -> SpotCategory {
    CATEGORY_RULES
        .iter()
        .find(|rule| {
            rule.tags
                .iter()
                .any(|(key, value)| poi.tag(key) == Some(*value))
        })
        .map_or(SpotCategory::Public, |rule| rule.category)
}

/// The synthetic spot substituted when nothing usable was found.
#[must_use]
pub fn fallback_spot(origin: Coordinates) -> NormalizedSpot {
    let position = origin.offset(FALLBACK_OFFSET_DEG, FALLBACK_OFFSET_DEG);
    NormalizedSpot {
        id: FALLBACK_SPOT_ID,
        name: FALLBACK_SPOT_NAME.to_string(),
        category: SpotCategory::General,
        lat: position.lat,
        lng: position.lng,
    }
}

/// Maps raw elements to named, categorized spots in source order.
///
/// Elements without a name or without coordinates are dropped. Never returns
/// an empty list: if nothing survives, the result is the single
/// [`fallback_spot`].
#[must_use]
pub fn normalize(elements: &[PointOfInterest], origin: Coordinates) -> Vec<NormalizedSpot> {
    let spots: Vec<NormalizedSpot> = elements
        .iter()
        .filter_map(|poi| {
            let name = poi.name()?;
            let position = poi.coordinates()?;
            let category = classify(poi);
            Some(NormalizedSpot {
                id: poi.id,
                name: category.display_name(name),
                category,
                lat: position.lat,
                lng: position.lng,
            })
        })
        .collect();

    if spots.is_empty() {
        tracing::info!(
            raw_count = elements.len(),
            "no named spots found; substituting fallback spot"
        );
        return vec![fallback_spot(origin)];
    }

    tracing::debug!(
        raw_count = elements.len(),
        kept = spots.len(),
        "normalized spots"
    );
    spots
}
