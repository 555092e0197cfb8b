use thiserror::Error;

/// Errors returned by the Overpass client.
#[derive(Debug, Error)]
pub enum OverpassError {
    /// Network, timeout, TLS failure or non-2xx status from the interpreter.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The interpreter answered 200 but reported a runtime error in `remark`.
    #[error("Overpass runtime error: {0}")]
    Remark(String),

    #[error("invalid Overpass base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
