//! Distance computation, status derivation and ordering.

use parkwise_core::{Coordinates, EnrichedSpot, Spot, SpotStatus};

pub const EARTH_RADIUS_KM: f64 = 6371.0;
/// Maximum number of spots returned per request.
pub const MAX_RESULTS: usize = 10;

/// Great-circle distance between two points using the haversine formula.
#[must_use]
pub fn haversine_km(from: Coordinates, to: Coordinates) -> f64 {
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lng = (to.lng - from.lng).to_radians();
    let a = ((d_lat / 2.0).sin().powi(2)
        + from.lat.to_radians().cos() * to.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Produces the final result list: distance from `origin` (km, 2 decimals),
/// status, stable ascending sort by distance, at most [`MAX_RESULTS`] entries.
#[must_use]
pub fn rank(spots: Vec<EnrichedSpot>, origin: Coordinates) -> Vec<Spot> {
    let mut ranked: Vec<Spot> = spots
        .into_iter()
        .map(|enriched| {
            let EnrichedSpot {
                spot,
                occupancy_percent,
            } = enriched;
            let distance_km = round_to_hundredths(haversine_km(origin, spot.coordinates()));
            Spot {
                id: spot.id,
                name: spot.name,
                lat: spot.lat,
                lng: spot.lng,
                category: spot.category,
                distance_km,
                occupancy_percent,
                status: SpotStatus::from_occupancy(occupancy_percent),
            }
        })
        .collect();

    // `sort_by` is stable: equal distances keep source order.
    ranked.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    ranked.truncate(MAX_RESULTS);
    ranked
}

#[cfg(test)]
mod tests {
    use parkwise_core::{NormalizedSpot, SpotCategory};

    use super::*;

    fn origin() -> Coordinates {
        Coordinates {
            lat: 23.2599,
            lng: 77.4126,
        }
    }

    fn enriched(id: i64, lat: f64, lng: f64, occupancy_percent: u8) -> EnrichedSpot {
        EnrichedSpot {
            spot: NormalizedSpot {
                id,
                name: format!("Spot {id}"),
                category: SpotCategory::Public,
                lat,
                lng,
            },
            occupancy_percent,
        }
    }

    #[test]
    fn distance_to_self_is_zero() {
        assert!(haversine_km(origin(), origin()).abs() < f64::EPSILON);
    }

    #[test]
    fn distance_is_symmetric() {
        let other = Coordinates {
            lat: 28.6139,
            lng: 77.2090,
        };
        let there = haversine_km(origin(), other);
        let back = haversine_km(other, origin());
        assert!((there - back).abs() < 1e-9);
        assert!(there > 500.0 && there < 700.0, "got {there}");
    }

    #[test]
    fn distance_matches_known_example() {
        let hotel = Coordinates {
            lat: 23.2610,
            lng: 77.4130,
        };
        let d = round_to_hundredths(haversine_km(origin(), hotel));
        assert!((d - 0.13).abs() < 1e-9, "got {d}");
    }

    #[test]
    fn rank_sorts_by_distance_ascending() {
        let spots = vec![
            enriched(1, 23.30, 77.41, 10),
            enriched(2, 23.26, 77.4126, 10),
            enriched(3, 23.28, 77.41, 10),
        ];
        let ranked = rank(spots, origin());
        let ids: Vec<i64> = ranked.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
        assert!(ranked
            .windows(2)
            .all(|w| w[0].distance_km <= w[1].distance_km));
    }

    #[test]
    fn rank_keeps_source_order_for_ties() {
        let spots = vec![
            enriched(7, 23.27, 77.4126, 10),
            enriched(3, 23.27, 77.4126, 10),
            enriched(5, 23.27, 77.4126, 10),
        ];
        let ids: Vec<i64> = rank(spots, origin()).iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![7, 3, 5]);
    }

    #[test]
    fn rank_truncates_to_ten_closest() {
        let spots: Vec<EnrichedSpot> = (0..15_i32)
            .map(|i| {
                enriched(
                    i64::from(i),
                    23.2599 + f64::from(15 - i) * 0.001,
                    77.4126,
                    40,
                )
            })
            .collect();
        let ranked = rank(spots, origin());
        assert_eq!(ranked.len(), MAX_RESULTS);
        // Ids 14..=5 are the closest ten.
        assert_eq!(ranked[0].id, 14);
        assert_eq!(ranked[9].id, 5);
    }

    #[test]
    fn rank_derives_status_from_occupancy() {
        let spots = vec![
            enriched(1, 23.26, 77.41, 90),
            enriched(2, 23.27, 77.41, 85),
            enriched(3, 23.28, 77.41, 86),
        ];
        let ranked = rank(spots, origin());
        assert_eq!(ranked[0].status, SpotStatus::Full);
        assert_eq!(ranked[1].status, SpotStatus::Available);
        assert_eq!(ranked[2].status, SpotStatus::Full);
    }

    #[test]
    fn rank_rounds_distance_to_two_decimals() {
        let ranked = rank(vec![enriched(1, 23.3, 77.5, 0)], origin());
        let d = ranked[0].distance_km;
        assert!(((d * 100.0).round() / 100.0 - d).abs() < 1e-12);
        assert!(d >= 0.0);
    }
}
