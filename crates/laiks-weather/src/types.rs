use serde::{Deserialize, Serialize};

/// Measurement system sent as the `units` query parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Metric,
    Imperial,
    Standard,
}

impl Units {
    pub fn as_query(&self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
            Self::Standard => "standard",
        }
    }

    /// Suffix shown after temperatures
    pub fn temperature_suffix(&self) -> &'static str {
        match self {
            Self::Metric => "°C",
            Self::Imperial => "°F",
            Self::Standard => "K",
        }
    }
}

/// Language for provider descriptions and local date names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Lv,
    En,
}

impl Locale {
    /// Language code understood by the provider (Latvian is `la` there)
    pub fn api_code(&self) -> &'static str {
        match self {
            Self::Lv => "la",
            Self::En => "en",
        }
    }
}

/// Geographic coordinate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

/// One place returned by forward or reverse geocoding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoResult {
    pub name: String,
    pub country: String,
    pub state: Option<String>,
    pub coordinate: Coordinate,
}

impl GeoResult {
    /// "state country", or just the country when there is no state
    pub fn subtitle(&self) -> String {
        match self.state.as_deref().filter(|s| !s.is_empty()) {
            Some(state) => format!("{} {}", state, self.country),
            None => self.country.clone(),
        }
    }

    /// "name, country" as shown on the current weather card
    pub fn place_label(&self) -> String {
        if self.country.is_empty() {
            self.name.clone()
        } else {
            format!("{}, {}", self.name, self.country)
        }
    }
}

/// Current weather conditions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub description: String,
    pub icon: String,
    pub temperature: f64,
    pub timestamp_unix: i64,
    pub timezone_offset_secs: i32,
}

/// One 3-hour forecast step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub timestamp_unix: i64,
    pub temperature: f64,
    pub temperature_max: f64,
    pub icon: String,
    pub description: String,
}

/// Ordered 3-hour steps (typically 40, five days of eight) plus the location's UTC offset
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ForecastSeries {
    pub entries: Vec<ForecastEntry>,
    pub timezone_offset_secs: i32,
}

/// Location service errors
#[derive(Debug, thiserror::Error)]
pub enum LocationError {
    #[error("Location service unavailable")]
    ServiceUnavailable,
    #[error("Location error: {0}")]
    Other(String),
}

/// Weather provider errors
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Request timed out")]
    Timeout,
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("Invalid API key")]
    InvalidApiKey,
    #[error("Parse error: {0}")]
    Parse(String),
}
