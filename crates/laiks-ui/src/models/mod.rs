pub mod weather_model;

pub use weather_model::{CurrentCard, DailyItem, HourlyItem, LoadStatus, WeatherModel};
