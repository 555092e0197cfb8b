//! Overpass interpreter response types.

use parkwise_core::PointOfInterest;
use serde::Deserialize;

/// Top-level `[out:json]` response.
///
/// A missing `elements` array is treated as an empty result set.
#[derive(Debug, Clone, Deserialize)]
pub struct OverpassResponse {
    #[serde(default)]
    pub elements: Vec<PointOfInterest>,
    /// Set by the interpreter when the query was cut short (timeouts, memory).
    #[serde(default)]
    pub remark: Option<String>,
}

impl OverpassResponse {
    /// Returns the remark when it reports a runtime error.
    #[must_use]
    pub fn runtime_error(&self) -> Option<&str> {
        self.remark
            .as_deref()
            .filter(|r| r.trim_start().starts_with("runtime error"))
    }
}
