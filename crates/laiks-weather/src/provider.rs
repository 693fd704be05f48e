use std::time::Duration;

use tracing::instrument;

use crate::api::{ApiCurrent, ApiForecast};
use crate::endpoints::EndpointBuilder;
use crate::fetcher::HttpFetcher;
use crate::types::{Coordinate, CurrentWeather, ForecastSeries, WeatherError};

/// OpenWeatherMap client: endpoint URLs plus an authenticated fetcher.
#[derive(Debug, Clone)]
pub struct WeatherProvider {
    fetcher: HttpFetcher,
    endpoints: EndpointBuilder,
}

impl WeatherProvider {
    pub fn new(fetcher: HttpFetcher, endpoints: EndpointBuilder) -> Self {
        Self { fetcher, endpoints }
    }

    /// Provider against the public API with default endpoints
    pub fn with_api_key(api_key: &str, timeout: Duration) -> Result<Self, WeatherError> {
        Ok(Self::new(
            HttpFetcher::new(api_key, timeout)?,
            EndpointBuilder::default(),
        ))
    }

    pub fn endpoints(&self) -> &EndpointBuilder {
        &self.endpoints
    }

    pub(crate) fn fetcher(&self) -> &HttpFetcher {
        &self.fetcher
    }

    #[instrument(skip(self), level = "debug")]
    pub async fn current_weather(&self, coord: Coordinate) -> Result<CurrentWeather, WeatherError> {
        let url = self.endpoints.current_weather(coord);
        let api: ApiCurrent = self.fetcher.fetch(&url).await?;
        let current = CurrentWeather::from(api);

        tracing::info!(
            "Current weather at {}: {} {}",
            coord,
            current.temperature,
            current.description
        );
        Ok(current)
    }

    #[instrument(skip(self), level = "debug")]
    pub async fn forecast(&self, coord: Coordinate) -> Result<ForecastSeries, WeatherError> {
        let url = self.endpoints.forecast(coord);
        let api: ApiForecast = self.fetcher.fetch(&url).await?;
        let series = ForecastSeries::from(api);

        tracing::info!("Fetched {} forecast steps for {}", series.entries.len(), coord);
        Ok(series)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn provider(server: &MockServer) -> WeatherProvider {
        WeatherProvider::new(
            HttpFetcher::new("key", Duration::from_secs(5)).unwrap(),
            EndpointBuilder::new(server.uri(), format!("{}/geo/1.0", server.uri())),
        )
    }

    #[tokio::test]
    async fn test_current_weather() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/weather"))
            .and(query_param("lat", "56.95"))
            .and(query_param("lon", "24.1"))
            .and(query_param("units", "metric"))
            .and(query_param("lang", "la"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "weather": [{"description": "apmācies", "icon": "04d"}],
                "main": {"temp": 8.9},
                "dt": 1_714_953_600,
                "timezone": 10_800
            })))
            .mount(&mock_server)
            .await;

        let current = provider(&mock_server)
            .current_weather(Coordinate::new(56.95, 24.1))
            .await
            .unwrap();

        assert_eq!(current.description, "apmācies");
        assert_eq!(current.timezone_offset_secs, 10_800);
    }

    #[tokio::test]
    async fn test_forecast() {
        let mock_server = MockServer::start().await;

        let list: Vec<_> = (0..40)
            .map(|i| {
                serde_json::json!({
                    "dt": 1_714_953_600 + i * 10_800,
                    "main": {"temp": i as f64, "temp_max": i as f64 + 0.5},
                    "weather": [{"description": "d", "icon": "01d"}]
                })
            })
            .collect();

        Mock::given(method("GET"))
            .and(path("/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "list": list,
                "city": {"timezone": 10_800}
            })))
            .mount(&mock_server)
            .await;

        let series = provider(&mock_server)
            .forecast(Coordinate::new(56.95, 24.1))
            .await
            .unwrap();

        assert_eq!(series.entries.len(), 40);
        assert_eq!(series.timezone_offset_secs, 10_800);
        assert_eq!(series.entries[39].temperature_max, 39.5);
    }

    #[tokio::test]
    async fn test_forecast_api_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/forecast"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "cod": "400",
                "message": "wrong latitude"
            })))
            .mount(&mock_server)
            .await;

        let result = provider(&mock_server)
            .forecast(Coordinate::new(123.0, 24.1))
            .await;

        assert!(matches!(result, Err(WeatherError::Api { status: 400, .. })));
    }
}
