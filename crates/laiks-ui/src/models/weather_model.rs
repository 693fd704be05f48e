//! View-model for the dashboard: one struct per section, filled by the
//! pipeline and handed to a renderer.

use laiks_weather::{Coordinate, CurrentWeather, DateFormatter, ForecastEntry, ForecastSeries};

/// Loading state of the whole dashboard
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    /// A fetch failed; holds the user-facing message
    Failed(String),
    /// The route could not be resolved to a location
    NotFound,
}

/// "Now" card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentCard {
    pub temperature: i64,
    pub description: String,
    pub icon: String,
    pub date_label: String,
    /// Filled in later by reverse geocoding
    pub location: Option<String>,
}

/// One cell of the hourly slider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourlyItem {
    pub time_label: String,
    pub temperature: i64,
    pub icon: String,
    pub description: String,
}

/// One row of the 5-day list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyItem {
    pub temperature_max: i64,
    pub icon: String,
    pub description: String,
    pub day_month: String,
    pub weekday: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeatherModel {
    pub status: LoadStatus,
    pub coordinate: Option<Coordinate>,
    /// The "use current location" action is disabled while it is showing
    pub current_location_active: bool,
    pub current: Option<CurrentCard>,
    pub hourly: Vec<HourlyItem>,
    pub forecast: Vec<DailyItem>,
    /// Bumped on every change
    pub revision: u64,
}

impl WeatherModel {
    /// Empty all three sections
    pub fn clear_sections(&mut self) {
        self.current = None;
        self.hourly.clear();
        self.forecast.clear();
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            LoadStatus::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Whole degrees, truncated toward zero
fn whole_degrees(t: f64) -> i64 {
    t.trunc() as i64
}

impl CurrentCard {
    pub fn from_weather(current: &CurrentWeather, formatter: &DateFormatter) -> Self {
        Self {
            temperature: whole_degrees(current.temperature),
            description: current.description.clone(),
            icon: current.icon.clone(),
            date_label: formatter.get_date(current.timestamp_unix, current.timezone_offset_secs),
            location: None,
        }
    }
}

impl HourlyItem {
    pub fn from_entry(entry: &ForecastEntry, timezone: i32, formatter: &DateFormatter) -> Self {
        Self {
            time_label: formatter.get_hours(entry.timestamp_unix, timezone),
            temperature: whole_degrees(entry.temperature),
            icon: entry.icon.clone(),
            description: entry.description.clone(),
        }
    }
}

impl DailyItem {
    /// Day labels use UTC, matching the provider's `dt_txt`
    pub fn from_entry(entry: &ForecastEntry, formatter: &DateFormatter) -> Self {
        Self {
            temperature_max: whole_degrees(entry.temperature_max),
            icon: entry.icon.clone(),
            description: entry.description.clone(),
            day_month: formatter.day_month(entry.timestamp_unix),
            weekday: formatter.weekday(entry.timestamp_unix),
        }
    }
}

pub fn hourly_items(series: &ForecastSeries, formatter: &DateFormatter) -> Vec<HourlyItem> {
    series
        .hourly()
        .iter()
        .map(|e| HourlyItem::from_entry(e, series.timezone_offset_secs, formatter))
        .collect()
}

pub fn daily_items(series: &ForecastSeries, formatter: &DateFormatter) -> Vec<DailyItem> {
    series
        .daily()
        .into_iter()
        .map(|e| DailyItem::from_entry(e, formatter))
        .collect()
}
