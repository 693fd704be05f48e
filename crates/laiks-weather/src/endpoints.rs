//! Request URLs for the four provider endpoints.
//!
//! Building a URL never fails and does no validation: out-of-range
//! coordinates or an empty query produce a well-formed URL that the
//! provider then rejects.

use crate::types::{Coordinate, Locale, Units};

pub const DEFAULT_DATA_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";
pub const DEFAULT_GEO_BASE_URL: &str = "https://api.openweathermap.org/geo/1.0";
pub const DEFAULT_GEOCODE_LIMIT: u32 = 5;

#[derive(Debug, Clone)]
pub struct EndpointBuilder {
    data_base_url: String,
    geo_base_url: String,
    units: Units,
    locale: Locale,
    geocode_limit: u32,
}

impl Default for EndpointBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_BASE_URL, DEFAULT_GEO_BASE_URL)
    }
}

impl EndpointBuilder {
    pub fn new(data_base_url: impl Into<String>, geo_base_url: impl Into<String>) -> Self {
        Self {
            data_base_url: trim_base(data_base_url.into()),
            geo_base_url: trim_base(geo_base_url.into()),
            units: Units::default(),
            locale: Locale::default(),
            geocode_limit: DEFAULT_GEOCODE_LIMIT,
        }
    }

    pub fn with_units(mut self, units: Units) -> Self {
        self.units = units;
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_geocode_limit(mut self, limit: u32) -> Self {
        self.geocode_limit = limit;
        self
    }

    pub fn units(&self) -> Units {
        self.units
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Current conditions, with descriptions in the configured language
    pub fn current_weather(&self, coord: Coordinate) -> String {
        format!(
            "{}/weather?lat={}&lon={}&lang={}&units={}",
            self.data_base_url,
            coord.latitude,
            coord.longitude,
            self.locale.api_code(),
            self.units.as_query()
        )
    }

    /// 5 day / 3 hour forecast
    pub fn forecast(&self, coord: Coordinate) -> String {
        format!(
            "{}/forecast?lat={}&lon={}&units={}",
            self.data_base_url,
            coord.latitude,
            coord.longitude,
            self.units.as_query()
        )
    }

    pub fn reverse_geo(&self, coord: Coordinate) -> String {
        format!(
            "{}/reverse?lat={}&lon={}&limit={}",
            self.geo_base_url, coord.latitude, coord.longitude, self.geocode_limit
        )
    }

    /// Forward geocoding of a free-text query such as "Rīga"
    pub fn geo(&self, query: &str) -> String {
        format!(
            "{}/direct?q={}&limit={}",
            self.geo_base_url,
            urlencoding::encode(query),
            self.geocode_limit
        )
    }
}

fn trim_base(mut base: String) -> String {
    while base.ends_with('/') {
        base.pop();
    }
    base
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::*;

    fn coords() -> Vec<Coordinate> {
        vec![
            Coordinate::new(56.9496, 24.1052),
            Coordinate::new(-33.8688, 151.2093),
            Coordinate::new(0.0, 0.0),
            Coordinate::new(90.0, -180.0),
            Coordinate::new(123.5, 999.25),
        ]
    }

    #[test]
    fn test_coordinate_urls_are_distinct_and_valid() {
        let builder = EndpointBuilder::default();

        for coord in coords() {
            let urls = [
                builder.current_weather(coord),
                builder.forecast(coord),
                builder.reverse_geo(coord),
            ];

            assert_ne!(urls[0], urls[1]);
            assert_ne!(urls[1], urls[2]);
            assert_ne!(urls[0], urls[2]);

            for u in &urls {
                assert!(url::Url::parse(u).is_ok(), "not a valid URL: {}", u);
                assert!(u.contains(&format!("lat={}", coord.latitude)), "{}", u);
                assert!(u.contains(&format!("lon={}", coord.longitude)), "{}", u);
            }
        }
    }

    #[test]
    fn test_current_weather_url() {
        let builder = EndpointBuilder::default();
        assert_eq!(
            builder.current_weather(Coordinate::new(56.95, 24.1)),
            "https://api.openweathermap.org/data/2.5/weather?lat=56.95&lon=24.1&lang=la&units=metric"
        );
    }

    #[test]
    fn test_forecast_url_respects_units() {
        let builder = EndpointBuilder::default().with_units(Units::Imperial);
        assert_eq!(
            builder.forecast(Coordinate::new(40.7, -74.0)),
            "https://api.openweathermap.org/data/2.5/forecast?lat=40.7&lon=-74&units=imperial"
        );
    }

    #[test]
    fn test_reverse_geo_url() {
        let builder = EndpointBuilder::default();
        assert_eq!(
            builder.reverse_geo(Coordinate::new(56.95, 24.1)),
            "https://api.openweathermap.org/geo/1.0/reverse?lat=56.95&lon=24.1&limit=5"
        );
    }

    #[test]
    fn test_geo_url_encodes_query() {
        let builder = EndpointBuilder::default().with_locale(Locale::En);
        let url = builder.geo("Rīga, LV");
        assert_eq!(
            url,
            "https://api.openweathermap.org/geo/1.0/direct?q=R%C4%ABga%2C%20LV&limit=5"
        );
        let parsed = url::Url::parse(&url).unwrap();
        let q = parsed
            .query_pairs()
            .find(|(k, _)| k == "q")
            .map(|(_, v)| v.into_owned());
        assert_eq!(q.as_deref(), Some("Rīga, LV"));
    }

    #[test]
    fn test_empty_query_still_builds() {
        let builder = EndpointBuilder::default();
        let url = builder.geo("");
        assert!(url.ends_with("/direct?q=&limit=5"));
        assert!(url::Url::parse(&url).is_ok());
    }

    #[test]
    fn test_trailing_slash_in_base_is_ignored() {
        let builder = EndpointBuilder::new("http://localhost:1234/", "http://localhost:1234/geo//");
        assert_eq!(
            builder.reverse_geo(Coordinate::new(1.0, 2.0)),
            "http://localhost:1234/geo/reverse?lat=1&lon=2&limit=5"
        );
        assert!(builder
            .current_weather(Coordinate::new(1.0, 2.0))
            .starts_with("http://localhost:1234/weather?"));
    }
}
