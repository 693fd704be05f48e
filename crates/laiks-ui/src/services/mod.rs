pub mod search_service;
pub mod weather_service;

pub use search_service::{SearchController, SearchState};
pub use weather_service::{PipelineOutcome, WeatherPipeline};
