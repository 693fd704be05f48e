//! Wire shapes of the OpenWeatherMap responses and their conversion
//! into the crate's own types.

use serde::Deserialize;

use crate::types::{Coordinate, CurrentWeather, ForecastEntry, ForecastSeries, GeoResult};

#[derive(Debug, Deserialize)]
pub(crate) struct ApiCondition {
    #[serde(default)]
    description: String,
    #[serde(default)]
    icon: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiMain {
    temp: f64,
    temp_max: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiCurrent {
    #[serde(default)]
    weather: Vec<ApiCondition>,
    main: ApiMain,
    dt: i64,
    #[serde(default)]
    timezone: i32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiForecastItem {
    dt: i64,
    main: ApiMain,
    #[serde(default)]
    weather: Vec<ApiCondition>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiCity {
    #[serde(default)]
    timezone: i32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiForecast {
    #[serde(default)]
    list: Vec<ApiForecastItem>,
    city: Option<ApiCity>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiGeo {
    name: String,
    #[serde(default)]
    country: String,
    state: Option<String>,
    lat: f64,
    lon: f64,
}

/// Error body, e.g. `{"cod":"404","message":"city not found"}`.
/// `cod` is a string on some endpoints and a number on others.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub message: Option<String>,
}

/// First condition of a `weather` array, empty strings when the array is empty
fn first_condition(weather: Vec<ApiCondition>) -> (String, String) {
    weather
        .into_iter()
        .next()
        .map(|c| (c.description, c.icon))
        .unwrap_or_default()
}

impl From<ApiCurrent> for CurrentWeather {
    fn from(api: ApiCurrent) -> Self {
        let (description, icon) = first_condition(api.weather);
        Self {
            description,
            icon,
            temperature: api.main.temp,
            timestamp_unix: api.dt,
            timezone_offset_secs: api.timezone,
        }
    }
}

impl From<ApiForecastItem> for ForecastEntry {
    fn from(api: ApiForecastItem) -> Self {
        let (description, icon) = first_condition(api.weather);
        Self {
            timestamp_unix: api.dt,
            temperature: api.main.temp,
            temperature_max: api.main.temp_max.unwrap_or(api.main.temp),
            icon,
            description,
        }
    }
}

impl From<ApiForecast> for ForecastSeries {
    fn from(api: ApiForecast) -> Self {
        Self {
            entries: api.list.into_iter().map(ForecastEntry::from).collect(),
            timezone_offset_secs: api.city.map(|c| c.timezone).unwrap_or(0),
        }
    }
}

impl From<ApiGeo> for GeoResult {
    fn from(api: ApiGeo) -> Self {
        Self {
            name: api.name,
            country: api.country,
            state: api.state,
            coordinate: Coordinate::new(api.lat, api.lon),
        }
    }
}
