//! Dashboard logic for Laiks: debounced place search, the chained weather
//! pipeline, hash routing and text rendering.

pub mod app_services;
mod error_mapping;
pub mod models;
pub mod render;
pub mod router;
pub mod services;

pub use app_services::AppServices;
pub use error_mapping::IntoAppError;
pub use models::{LoadStatus, WeatherModel};
pub use router::{Route, Router};
pub use services::{PipelineOutcome, SearchController, SearchState, WeatherPipeline};
