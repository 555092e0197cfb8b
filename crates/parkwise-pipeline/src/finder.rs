//! Per-request orchestration of the spot pipeline.

use parkwise_core::{
    load_catalog, AppConfig, CatalogFile, Coordinates, GeoSourceMode, PointOfInterest,
    RequestContext, Spot,
};
use parkwise_overpass::{OverpassClient, OverpassError};
use parkwise_predictor::{Prediction, PredictorClient};

use crate::enrich::enrich;
use crate::error::PipelineError;
use crate::normalize::normalize;
use crate::rank::rank;

/// Where raw points of interest come from, chosen once at startup.
#[derive(Debug, Clone)]
pub enum SpotSource {
    /// Overpass query per request.
    Live {
        client: OverpassClient,
        radius_m: u32,
    },
    /// Fixed demo catalog; every element is returned for every request.
    Catalog(CatalogFile),
}

impl SpotSource {
    #[must_use]
    pub fn mode(&self) -> GeoSourceMode {
        match self {
            SpotSource::Live { .. } => GeoSourceMode::Live,
            SpotSource::Catalog(_) => GeoSourceMode::Catalog,
        }
    }

    /// Position used when a request carries no coordinates.
    #[must_use]
    pub fn default_origin(&self) -> Option<Coordinates> {
        match self {
            SpotSource::Live { .. } => None,
            SpotSource::Catalog(catalog) => Some(catalog.origin),
        }
    }

    /// # Errors
    ///
    /// Returns [`OverpassError`] when the live query fails. The catalog
    /// source never fails.
    pub async fn fetch(&self, origin: Coordinates) -> Result<Vec<PointOfInterest>, OverpassError> {
        match self {
            SpotSource::Live { client, radius_m } => client.fetch_elements(origin, *radius_m).await,
            SpotSource::Catalog(catalog) => Ok(catalog.elements.clone()),
        }
    }
}

/// One search request.
#[derive(Debug, Clone, Copy)]
pub struct SpotQuery {
    /// User position; may be omitted only in catalog mode.
    pub origin: Option<Coordinates>,
    pub context: RequestContext,
}

/// Runs the full search pipeline. Holds only immutable, shareable state, so
/// a single instance serves concurrent requests.
#[derive(Debug, Clone)]
pub struct SpotFinder {
    source: SpotSource,
    predictor: PredictorClient,
}

impl SpotFinder {
    #[must_use]
    pub fn new(source: SpotSource, predictor: PredictorClient) -> Self {
        Self { source, predictor }
    }

    /// Builds the finder described by `config`, loading the catalog file in
    /// catalog mode.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError`] if a client cannot be constructed or the
    /// catalog cannot be loaded.
    pub fn from_config(config: &AppConfig) -> Result<Self, PipelineError> {
        let source = match config.geo_source {
            GeoSourceMode::Live => SpotSource::Live {
                client: OverpassClient::with_base_url(
                    &config.overpass_url,
                    config.overpass_timeout_secs,
                    &config.user_agent,
                )?,
                radius_m: config.search_radius_m,
            },
            GeoSourceMode::Catalog => {
                let catalog = load_catalog(&config.catalog_path)?;
                tracing::info!(
                    path = %config.catalog_path.display(),
                    elements = catalog.elements.len(),
                    "loaded demo catalog"
                );
                SpotSource::Catalog(catalog)
            }
        };

        let predictor = PredictorClient::new(
            &config.predictor_url,
            config.predictor_timeout_secs,
            &config.user_agent,
        )?;

        Ok(Self::new(source, predictor))
    }

    #[must_use]
    pub fn source_mode(&self) -> GeoSourceMode {
        self.source.mode()
    }

    /// Picks the requested origin, or the source default when none was given.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::MissingOrigin`] when no origin is available.
    pub fn resolve_origin(
        &self,
        requested: Option<Coordinates>,
    ) -> Result<Coordinates, PipelineError> {
        requested
            .or_else(|| self.source.default_origin())
            .ok_or(PipelineError::MissingOrigin)
    }

    /// Finds, enriches and ranks the spots around the query origin.
    ///
    /// The predictor call runs concurrently with the geo fetch and is only
    /// awaited once normalization is done. Predictor failure degrades to the
    /// fallback score; geo failure fails the whole search.
    ///
    /// # Errors
    ///
    /// - [`PipelineError::MissingOrigin`] if no origin can be resolved.
    /// - [`PipelineError::Geo`] if the geo source fails.
    pub async fn find_spots(&self, query: SpotQuery) -> Result<Vec<Spot>, PipelineError> {
        let origin = self.resolve_origin(query.origin)?;
        let ctx = query.context;

        let predictor = self.predictor.clone();
        let prediction_task = tokio::spawn(async move { predictor.predict(ctx).await });

        let elements = match self.source.fetch(origin).await {
            Ok(elements) => elements,
            Err(e) => {
                prediction_task.abort();
                tracing::error!(
                    error = %e,
                    lat = origin.lat,
                    lng = origin.lng,
                    "geo data source failed"
                );
                return Err(PipelineError::Geo(e));
            }
        };

        let normalized = normalize(&elements, origin);

        let prediction = prediction_task.await.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "predictor task failed; using fallback score");
            Prediction::Unavailable
        });

        let spots = rank(enrich(normalized, prediction, ctx), origin);

        tracing::info!(
            lat = origin.lat,
            lng = origin.lng,
            raw_count = elements.len(),
            returned = spots.len(),
            predicted = prediction.is_available(),
            "spot search completed"
        );

        Ok(spots)
    }
}
