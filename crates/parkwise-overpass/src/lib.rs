//! Overpass API access for parkwise.
//!
//! Builds the nearby-spots Overpass QL query and fetches raw points of
//! interest from an Overpass interpreter endpoint.

pub mod client;
pub mod error;
pub mod query;
pub mod types;

pub use client::OverpassClient;
pub use error::OverpassError;
pub use query::{build_query, DEFAULT_RADIUS_M};
pub use types::OverpassResponse;
