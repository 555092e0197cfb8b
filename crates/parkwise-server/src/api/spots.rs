use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use parkwise_core::{Coordinates, RequestContext, Spot};
use parkwise_pipeline::{PipelineError, SpotQuery};
use serde::{Deserialize, Deserializer};

use crate::middleware::RequestId;

use super::{ApiError, AppState};

/// Body of a spot search. Field names follow the web client.
#[derive(Debug, Deserialize)]
pub(super) struct SpotSearchRequest {
    pub day: u8,
    pub hour: u8,
    /// `0`/`1` or a boolean. Derived from `day` when omitted.
    #[serde(default, deserialize_with = "flag_from_int_or_bool")]
    pub is_weekend: Option<bool>,
    #[serde(rename = "userLat")]
    pub user_lat: Option<f64>,
    #[serde(rename = "userLng")]
    pub user_lng: Option<f64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Flag {
    Bool(bool),
    Int(u8),
}

fn flag_from_int_or_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Flag>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Flag::Bool(b)) => Ok(Some(b)),
        Some(Flag::Int(0)) => Ok(Some(false)),
        Some(Flag::Int(1)) => Ok(Some(true)),
        Some(Flag::Int(other)) => Err(serde::de::Error::custom(format!(
            "is_weekend must be 0 or 1, got {other}"
        ))),
    }
}

impl SpotSearchRequest {
    fn into_query(self, request_id: &str) -> Result<SpotQuery, ApiError> {
        let invalid = |message: String| ApiError::new(request_id, "validation_error", message);

        let context = match self.is_weekend {
            Some(is_weekend) => RequestContext::new(self.day, self.hour, is_weekend),
            None => RequestContext::for_day_and_hour(self.day, self.hour),
        }
        .map_err(|e| invalid(e.to_string()))?;

        let origin = match (self.user_lat, self.user_lng) {
            (Some(lat), Some(lng)) => {
                Some(Coordinates::new(lat, lng).map_err(|e| invalid(e.to_string()))?)
            }
            (None, None) => None,
            _ => {
                return Err(invalid(
                    "userLat and userLng must be provided together".to_string(),
                ))
            }
        };

        Ok(SpotQuery { origin, context })
    }
}

/// Returns the ranked spot list as a bare JSON array, the shape the web
/// client renders directly.
pub(super) async fn search_spots(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    payload: Result<Json<SpotSearchRequest>, JsonRejection>,
) -> Result<Json<Vec<Spot>>, ApiError> {
    let Json(body) =
        payload.map_err(|e| ApiError::new(req_id.0.clone(), "bad_request", e.body_text()))?;
    let query = body.into_query(&req_id.0)?;

    let spots = state
        .finder
        .find_spots(query)
        .await
        .map_err(|e| map_pipeline_error(&req_id.0, &e))?;

    Ok(Json(spots))
}

fn map_pipeline_error(request_id: &str, error: &PipelineError) -> ApiError {
    match error {
        PipelineError::MissingOrigin => ApiError::new(
            request_id,
            "validation_error",
            "userLat and userLng are required",
        ),
        other => {
            tracing::error!(request_id, error = %other, "spot search failed");
            ApiError::new(request_id, "upstream_error", "spot search failed")
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn parse(value: serde_json::Value) -> Result<SpotSearchRequest, serde_json::Error> {
        serde_json::from_value(value)
    }

    #[test]
    fn weekend_flag_accepts_integers_and_booleans() {
        let numeric = parse(json!({ "day": 5, "hour": 10, "is_weekend": 1 })).unwrap();
        assert_eq!(numeric.is_weekend, Some(true));
        let boolean = parse(json!({ "day": 1, "hour": 10, "is_weekend": false })).unwrap();
        assert_eq!(boolean.is_weekend, Some(false));
    }

    #[test]
    fn weekend_flag_rejects_other_integers() {
        assert!(parse(json!({ "day": 1, "hour": 10, "is_weekend": 2 })).is_err());
    }

    #[test]
    fn missing_weekend_flag_is_derived_from_day() {
        let request = parse(json!({ "day": 6, "hour": 10 })).unwrap();
        let query = request.into_query("req-1").unwrap();
        assert!(query.context.is_weekend);
        assert!(query.origin.is_none());
    }

    #[test]
    fn explicit_weekend_flag_is_forwarded_unchanged() {
        let request = parse(json!({ "day": 6, "hour": 10, "is_weekend": 0 })).unwrap();
        let query = request.into_query("req-1").unwrap();
        assert!(!query.context.is_weekend);
    }

    #[test]
    fn coordinates_are_parsed_from_camel_case_fields() {
        let request = parse(json!({
            "day": 2, "hour": 14, "is_weekend": 0,
            "userLat": 23.2599, "userLng": 77.4126
        }))
        .unwrap();
        let origin = request.into_query("req-1").unwrap().origin.expect("origin");
        assert!((origin.lat - 23.2599).abs() < f64::EPSILON);
        assert!((origin.lng - 77.4126).abs() < f64::EPSILON);
    }

    #[test]
    fn lone_latitude_is_rejected() {
        let request = parse(json!({ "day": 2, "hour": 14, "userLat": 23.2599 })).unwrap();
        let error = request.into_query("req-1").unwrap_err();
        assert_eq!(error.error.code, "validation_error");
    }

    #[test]
    fn out_of_range_latitude_is_rejected() {
        let request = parse(json!({ "day": 2, "hour": 14, "userLat": 95.0, "userLng": 0.0 })).unwrap();
        assert!(request.into_query("req-1").is_err());
    }

    #[test]
    fn out_of_range_day_is_rejected() {
        let request = parse(json!({ "day": 7, "hour": 14 })).unwrap();
        assert!(request.into_query("req-1").is_err());
    }

    #[test]
    fn missing_origin_maps_to_validation_error() {
        let error = map_pipeline_error("req-1", &PipelineError::MissingOrigin);
        assert_eq!(error.error.code, "validation_error");
    }
}
