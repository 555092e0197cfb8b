//! Overpass QL query construction.

use std::fmt::Write as _;

use parkwise_core::Coordinates;

/// Default search radius around the user, in meters.
pub const DEFAULT_RADIUS_M: u32 = 3_000;

/// Tag predicates requested in every nearby-spots query, in query order.
pub const SPOT_PREDICATES: &[(&str, &str)] = &[
    ("amenity", "parking"),
    ("shop", "car_repair"),
    ("amenity", "fuel"),
    ("tourism", "hotel"),
    ("tourism", "guest_house"),
    ("shop", "mall"),
];

/// Builds an Overpass QL query returning every node within `radius_m` meters
/// of `origin` that matches any of [`SPOT_PREDICATES`].
#[must_use]
pub fn build_query(origin: Coordinates, radius_m: u32) -> String {
    let mut query = String::from("[out:json];\n(\n");
    for (key, value) in SPOT_PREDICATES {
        // Writing into a String cannot fail.
        let _ = writeln!(
            query,
            "  node[\"{key}\"=\"{value}\"](around:{radius_m},{},{});",
            origin.lat, origin.lng
        );
    }
    query.push_str(");\nout body;\n");
    query
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bhopal() -> Coordinates {
        Coordinates {
            lat: 23.2599,
            lng: 77.4126,
        }
    }

    #[test]
    fn query_contains_all_six_predicates() {
        let q = build_query(bhopal(), DEFAULT_RADIUS_M);
        for needle in [
            r#"node["amenity"="parking"]"#,
            r#"node["shop"="car_repair"]"#,
            r#"node["amenity"="fuel"]"#,
            r#"node["tourism"="hotel"]"#,
            r#"node["tourism"="guest_house"]"#,
            r#"node["shop"="mall"]"#,
        ] {
            assert!(q.contains(needle), "missing {needle} in:\n{q}");
        }
        assert_eq!(q.matches("around:").count(), 6);
    }

    #[test]
    fn query_uses_radius_and_coordinates() {
        let q = build_query(bhopal(), DEFAULT_RADIUS_M);
        assert_eq!(q.matches("(around:3000,23.2599,77.4126)").count(), 6);
    }

    #[test]
    fn query_requests_json_and_body_output() {
        let q = build_query(bhopal(), 500);
        assert!(q.starts_with("[out:json];"));
        assert!(q.trim_end().ends_with("out body;"));
        assert!(q.contains("(around:500,"));
    }

    #[test]
    fn query_handles_negative_coordinates() {
        let q = build_query(
            Coordinates {
                lat: -33.8688,
                lng: -151.2093,
            },
            DEFAULT_RADIUS_M,
        );
        assert!(q.contains("(around:3000,-33.8688,-151.2093)"));
    }
}
