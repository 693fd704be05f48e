//! Shared application services built from the loaded configuration.
//!
//! One `AppServices` owns the weather provider; the search controller,
//! pipeline and router are created from it and share the same HTTP client.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};

use laiks_core::Config;
use laiks_weather::{DateFormatter, EndpointBuilder, HttpFetcher, Locale, Units, WeatherProvider};

use crate::router::Router;
use crate::services::{SearchController, WeatherPipeline};

pub struct AppServices {
    config: Config,
    provider: Arc<WeatherProvider>,
}

impl AppServices {
    pub fn from_config(config: Config) -> Result<Self> {
        let weather = &config.weather;
        if !weather.is_configured() {
            tracing::warn!("Weather API key not configured; requests will be rejected");
        }

        let fetcher = HttpFetcher::new(
            weather.api_key.clone(),
            Duration::from_secs(weather.request_timeout_secs),
        )
        .context("Failed to create HTTP client")?;

        let endpoints = EndpointBuilder::new(&weather.data_base_url, &weather.geo_base_url)
            .with_units(weather.units)
            .with_locale(weather.language)
            .with_geocode_limit(weather.geocode_limit);

        tracing::info!(
            "Weather services ready ({}, {})",
            weather.units.as_query(),
            weather.language.api_code()
        );

        Ok(Self {
            provider: Arc::new(WeatherProvider::new(fetcher, endpoints)),
            config,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn provider(&self) -> Arc<WeatherProvider> {
        self.provider.clone()
    }

    pub fn units(&self) -> Units {
        self.config.weather.units
    }

    pub fn locale(&self) -> Locale {
        self.config.weather.language
    }

    pub fn search_controller(&self) -> SearchController {
        SearchController::new(
            self.provider.clone(),
            Duration::from_millis(self.config.search.debounce_ms),
        )
    }

    pub fn pipeline(&self) -> WeatherPipeline {
        WeatherPipeline::new(self.provider.clone(), DateFormatter::new(self.locale()))
    }

    /// Router over a fresh pipeline, using the configured home and fallback locations
    pub fn router(&self) -> Router {
        let weather = &self.config.weather;
        Router::new(self.pipeline(), weather.home, weather.fallback)
    }
}
