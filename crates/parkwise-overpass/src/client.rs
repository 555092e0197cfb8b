//! HTTP client for an Overpass API interpreter endpoint.
//!
//! One query per call: no retries and no pagination. Transport failures,
//! non-2xx statuses, malformed bodies and interpreter runtime errors are all
//! surfaced as [`OverpassError`].

use std::time::Duration;

use parkwise_core::{Coordinates, PointOfInterest};
use reqwest::{Client, Url};

use crate::error::OverpassError;
use crate::query::build_query;
use crate::types::OverpassResponse;

const DEFAULT_BASE_URL: &str = "https://overpass-api.de/api/interpreter";

/// Client for the Overpass interpreter.
///
/// Use [`OverpassClient::new`] for the public endpoint or
/// [`OverpassClient::with_base_url`] for a mirror or a mock server in tests.
#[derive(Debug, Clone)]
pub struct OverpassClient {
    client: Client,
    base_url: Url,
}

impl OverpassClient {
    /// Creates a client pointed at the public Overpass interpreter.
    ///
    /// # Errors
    ///
    /// Returns [`OverpassError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, OverpassError> {
        Self::with_base_url(DEFAULT_BASE_URL, timeout_secs, user_agent)
    }

    /// Creates a client with a custom interpreter URL.
    ///
    /// # Errors
    ///
    /// Returns [`OverpassError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`OverpassError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, OverpassError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let base_url = Url::parse(base_url).map_err(|e| OverpassError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    /// Fetches every matching point of interest within `radius_m` meters of
    /// `origin`, in the order the interpreter returned them.
    ///
    /// # Errors
    ///
    /// - [`OverpassError::Http`] on network failure, timeout or non-2xx status.
    /// - [`OverpassError::Deserialize`] if the body is not the expected JSON.
    /// - [`OverpassError::Remark`] if the interpreter reports a runtime error.
    pub async fn fetch_elements(
        &self,
        origin: Coordinates,
        radius_m: u32,
    ) -> Result<Vec<PointOfInterest>, OverpassError> {
        let query = build_query(origin, radius_m);
        let url = self.build_url(&query);

        tracing::debug!(
            lat = origin.lat,
            lng = origin.lng,
            radius_m,
            "querying Overpass"
        );

        let response = self.client.get(url).send().await?.error_for_status()?;
        let body = response.text().await?;
        let parsed: OverpassResponse =
            serde_json::from_str(&body).map_err(|e| OverpassError::Deserialize {
                context: format!("overpass(lat={}, lng={})", origin.lat, origin.lng),
                source: e,
            })?;

        if let Some(remark) = parsed.runtime_error() {
            return Err(OverpassError::Remark(remark.to_string()));
        }

        tracing::debug!(count = parsed.elements.len(), "Overpass returned elements");
        Ok(parsed.elements)
    }

    /// Appends the query as the percent-encoded `data` parameter.
    fn build_url(&self, query: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut().append_pair("data", query);
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(base_url: &str) -> OverpassClient {
        OverpassClient::with_base_url(base_url, 5, "parkwise-test/0.1")
            .expect("client construction should not fail")
    }

    #[test]
    fn build_url_encodes_query_as_data_param() {
        let client = test_client("https://overpass.example.com/api/interpreter");
        let url = client.build_url("[out:json];node(1);out;");
        assert!(url
            .as_str()
            .starts_with("https://overpass.example.com/api/interpreter?data="));
        let data = url
            .query_pairs()
            .find(|(k, _)| k == "data")
            .map(|(_, v)| v.into_owned());
        assert_eq!(data.as_deref(), Some("[out:json];node(1);out;"));
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let result = OverpassClient::with_base_url("not a url", 5, "ua");
        assert!(matches!(result, Err(OverpassError::InvalidBaseUrl { .. })));
    }
}
