//! Forward geocoding (place name to coordinates) and reverse geocoding
//! (coordinates to a human-readable place name).

use tracing::instrument;

use crate::api::ApiGeo;
use crate::provider::WeatherProvider;
use crate::types::{Coordinate, GeoResult, WeatherError};

impl WeatherProvider {
    /// Look up places matching a free-text query.
    ///
    /// Zero matches is `Ok(vec![])`, not an error.
    #[instrument(skip(self), level = "debug")]
    pub async fn search_locations(&self, query: &str) -> Result<Vec<GeoResult>, WeatherError> {
        let url = self.endpoints().geo(query);
        let api: Vec<ApiGeo> = self.fetcher().fetch(&url).await?;
        let results: Vec<GeoResult> = api.into_iter().map(GeoResult::from).collect();

        tracing::debug!("Geocoded {:?} to {} result(s)", query, results.len());
        Ok(results)
    }

    /// All places the provider associates with a coordinate, best match first
    #[instrument(skip(self), level = "debug")]
    pub async fn reverse_lookup(&self, coord: Coordinate) -> Result<Vec<GeoResult>, WeatherError> {
        let url = self.endpoints().reverse_geo(coord);
        let api: Vec<ApiGeo> = self.fetcher().fetch(&url).await?;
        Ok(api.into_iter().map(GeoResult::from).collect())
    }
}

/// Reverse geocode coordinates to a place label (e.g. "Rīga, LV").
/// Returns `None` on failure or when nothing is known at that point; the
/// caller can fall back to coordinates.
pub async fn reverse_geocode(provider: &WeatherProvider, coord: Coordinate) -> Option<String> {
    let results = match provider.reverse_lookup(coord).await {
        Ok(r) => r,
        Err(e) => {
            tracing::debug!("Reverse geocode failed: {}", e);
            return None;
        }
    };

    let Some(best) = results.into_iter().next() else {
        tracing::debug!("No reverse geocode result for {}", coord);
        return None;
    };

    let label = best.place_label();
    tracing::info!("Reverse geocoded to: {}", label);
    Some(label)
}
