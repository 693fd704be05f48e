//! Hash routes (`#/weather?lat=..&lon=..`, `#/current-location`) and
//! dispatch to the weather pipeline.

use laiks_weather::location::get_current_location;
use laiks_weather::Coordinate;

use crate::services::weather_service::{PipelineOutcome, WeatherPipeline};

#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Weather(Coordinate),
    CurrentLocation,
    /// Unknown path or unusable parameters; holds the hash as given
    NotFound(String),
}

impl Route {
    /// Parse a location hash. Never fails: anything unrecognized is `NotFound`.
    pub fn parse(hash: &str) -> Self {
        let trimmed = hash.trim();
        let body = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let (path, query) = body.split_once('?').unwrap_or((body, ""));

        match path {
            "/weather" => Self::parse_coordinate(query)
                .map(Route::Weather)
                .unwrap_or_else(|| Route::NotFound(hash.to_string())),
            "/current-location" => Route::CurrentLocation,
            _ => Route::NotFound(hash.to_string()),
        }
    }

    fn parse_coordinate(query: &str) -> Option<Coordinate> {
        let mut lat = None;
        let mut lon = None;

        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "lat" => lat = value.parse::<f64>().ok().filter(|v| v.is_finite()),
                "lon" => lon = value.parse::<f64>().ok().filter(|v| v.is_finite()),
                _ => {}
            }
        }

        Some(Coordinate::new(lat?, lon?))
    }

    pub fn to_hash(&self) -> String {
        match self {
            Route::Weather(c) => format!("#/weather?lat={}&lon={}", c.latitude, c.longitude),
            Route::CurrentLocation => "#/current-location".to_string(),
            Route::NotFound(hash) => hash.clone(),
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hash())
    }
}

/// Turns routes into pipeline invocations.
pub struct Router {
    pipeline: WeatherPipeline,
    home: Option<Coordinate>,
    fallback: Coordinate,
}

impl Router {
    pub fn new(pipeline: WeatherPipeline, home: Option<Coordinate>, fallback: Coordinate) -> Self {
        Self {
            pipeline,
            home,
            fallback,
        }
    }

    pub fn pipeline(&self) -> &WeatherPipeline {
        &self.pipeline
    }

    /// Show the dashboard for a route.
    ///
    /// `#/current-location` without a usable home location falls back to the
    /// default location, as a browser does when geolocation is denied.
    pub async fn navigate(&self, route: &Route) -> PipelineOutcome {
        tracing::info!("Navigating to {}", route);

        match route {
            Route::Weather(coord) => self.pipeline.update(*coord, false).await,
            Route::CurrentLocation => match get_current_location(self.home) {
                Ok(coord) => self.pipeline.update(coord, true).await,
                Err(e) => {
                    tracing::warn!("Current location unavailable ({}), using fallback", e);
                    self.pipeline.update(self.fallback, false).await
                }
            },
            Route::NotFound(hash) => {
                tracing::warn!("No route for {:?}", hash);
                self.pipeline.show_not_found();
                PipelineOutcome::NotFound
            }
        }
    }
}
