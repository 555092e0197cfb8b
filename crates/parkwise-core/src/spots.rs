//! Spot domain model.
//!
//! Raw points of interest come from the geo source (or the demo catalog) with
//! free-form tags. They move through three explicit stages before reaching the
//! caller: [`NormalizedSpot`] (category and label assigned), [`EnrichedSpot`]
//! (occupancy attached) and finally [`Spot`] (distance and status derived).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Occupancy strictly above this value marks a spot as [`SpotStatus::Full`].
pub const FULL_THRESHOLD_PERCENT: u8 = 85;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Builds a validated coordinate pair.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidCoordinates`] if either value is not finite
    /// or lies outside `[-90, 90]` / `[-180, 180]`.
    pub fn new(lat: f64, lng: f64) -> Result<Self, CoreError> {
        let invalid = |reason: &str| CoreError::InvalidCoordinates {
            lat,
            lng,
            reason: reason.to_string(),
        };

        if !lat.is_finite() || !lng.is_finite() {
            return Err(invalid("coordinates must be finite numbers"));
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(invalid("latitude must be within [-90, 90]"));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(invalid("longitude must be within [-180, 180]"));
        }

        Ok(Self { lat, lng })
    }

    /// Returns a copy shifted by the given deltas (no validation).
    #[must_use]
    pub fn offset(self, d_lat: f64, d_lng: f64) -> Self {
        Self {
            lat: self.lat + d_lat,
            lng: self.lng + d_lng,
        }
    }
}

/// A raw point of interest as delivered by the geo source.
///
/// Only `id` is required on the wire. Elements without coordinates or a name
/// are tolerated here and discarded during normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointOfInterest {
    pub id: i64,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
}

impl PointOfInterest {
    #[must_use]
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    /// The `name` tag, trimmed. `None` when absent or blank.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.tag("name").map(str::trim).filter(|n| !n.is_empty())
    }

    #[must_use]
    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lng)) if lat.is_finite() && lng.is_finite() => {
                Some(Coordinates { lat, lng })
            }
            _ => None,
        }
    }
}

/// Closed classification of a spot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpotCategory {
    Public,
    #[serde(rename = "Garage/Service")]
    GarageService,
    #[serde(rename = "Hotel Parking")]
    HotelParking,
    #[serde(rename = "Mall Parking")]
    MallParking,
    General,
}

impl SpotCategory {
    /// Short label prefixed onto display names. `None` for categories that
    /// keep the raw name.
    #[must_use]
    pub fn label(self) -> Option<&'static str> {
        match self {
            SpotCategory::GarageService => Some("Garage"),
            SpotCategory::HotelParking => Some("Hotel"),
            SpotCategory::MallParking => Some("Mall"),
            SpotCategory::Public | SpotCategory::General => None,
        }
    }

    /// Builds the user-facing name, e.g. `"Hotel: Lotus Inn"`.
    #[must_use]
    pub fn display_name(self, raw_name: &str) -> String {
        match self.label() {
            Some(label) => format!("{label}: {raw_name}"),
            None => raw_name.to_string(),
        }
    }
}

impl std::fmt::Display for SpotCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpotCategory::Public => write!(f, "Public"),
            SpotCategory::GarageService => write!(f, "Garage/Service"),
            SpotCategory::HotelParking => write!(f, "Hotel Parking"),
            SpotCategory::MallParking => write!(f, "Mall Parking"),
            SpotCategory::General => write!(f, "General"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpotStatus {
    Available,
    Full,
}

impl SpotStatus {
    #[must_use]
    pub fn from_occupancy(occupancy_percent: u8) -> Self {
        if occupancy_percent > FULL_THRESHOLD_PERCENT {
            SpotStatus::Full
        } else {
            SpotStatus::Available
        }
    }
}

/// Time context of a search, forwarded unchanged to the occupancy predictor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    /// 0 = Monday … 6 = Sunday.
    pub day_of_week: u8,
    pub hour: u8,
    pub is_weekend: bool,
}

impl RequestContext {
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidDayOfWeek`] or [`CoreError::InvalidHour`]
    /// when a value is out of range.
    pub fn new(day_of_week: u8, hour: u8, is_weekend: bool) -> Result<Self, CoreError> {
        if day_of_week > 6 {
            return Err(CoreError::InvalidDayOfWeek(day_of_week));
        }
        if hour > 23 {
            return Err(CoreError::InvalidHour(hour));
        }
        Ok(Self {
            day_of_week,
            hour,
            is_weekend,
        })
    }

    /// Builds a context treating Saturday (5) and Sunday (6) as the weekend.
    ///
    /// # Errors
    ///
    /// Same as [`RequestContext::new`].
    pub fn for_day_and_hour(day_of_week: u8, hour: u8) -> Result<Self, CoreError> {
        Self::new(day_of_week, hour, day_of_week >= 5)
    }
}

/// A named, categorized spot without request-specific annotations.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedSpot {
    pub id: i64,
    pub name: String,
    pub category: SpotCategory,
    pub lat: f64,
    pub lng: f64,
}

impl NormalizedSpot {
    #[must_use]
    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            lat: self.lat,
            lng: self.lng,
        }
    }
}

/// A normalized spot carrying its final occupancy percentage.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedSpot {
    pub spot: NormalizedSpot,
    pub occupancy_percent: u8,
}

/// A ranked search result, serialized in the response shape
/// `{ id, name, lat, lng, type, distance, occupancy, status }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spot {
    pub id: i64,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(rename = "type")]
    pub category: SpotCategory,
    #[serde(rename = "distance")]
    pub distance_km: f64,
    #[serde(rename = "occupancy")]
    pub occupancy_percent: u8,
    pub status: SpotStatus,
}
