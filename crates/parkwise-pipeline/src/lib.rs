//! Nearby-spot search pipeline.
//!
//! 1. Fetch raw points of interest (Overpass or the demo catalog).
//! 2. [`normalize`]: drop unusable records, classify, label.
//! 3. [`enrich`]: attach predicted occupancy with category/time adjustments.
//! 4. [`rank`]: compute distance and status, sort, truncate.
//!
//! [`SpotFinder`] wires the stages together for one request.

pub mod enrich;
pub mod error;
pub mod finder;
pub mod normalize;
pub mod rank;

pub use enrich::enrich;
pub use error::PipelineError;
pub use finder::{SpotFinder, SpotQuery, SpotSource};
pub use normalize::{classify, normalize, FALLBACK_SPOT_NAME};
pub use rank::{haversine_km, rank, MAX_RESULTS};
