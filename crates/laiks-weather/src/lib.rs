//! Weather service for Laiks
//!
//! OpenWeatherMap client: current conditions, 5 day / 3 hour forecast,
//! forward and reverse geocoding, plus localized date labels.

mod api;
pub mod dates;
pub mod endpoints;
pub mod fetcher;
pub mod geocode;
pub mod location;
pub mod provider;
pub mod types;
pub mod views;

pub use dates::DateFormatter;
pub use endpoints::EndpointBuilder;
pub use fetcher::HttpFetcher;
pub use geocode::reverse_geocode;
pub use provider::WeatherProvider;
pub use types::*;
