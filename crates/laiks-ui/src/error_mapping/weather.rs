use laiks_core::{AppError, NetworkError, ReqwestErrorExt, WeatherError};
use laiks_weather::WeatherError as ProviderError;

/// Conversion into the application error hierarchy.
///
/// A local trait, since both error types live in other crates.
pub trait IntoAppError {
    fn into_app_error(self) -> AppError;
}

impl IntoAppError for ProviderError {
    fn into_app_error(self) -> AppError {
        match self {
            ProviderError::Network(e) => AppError::Network(e.into_network_error()),
            ProviderError::Timeout => AppError::Network(NetworkError::Timeout),
            ProviderError::Api { status, message } if status == 404 => {
                AppError::Weather(WeatherError::LocationNotFound(message))
            }
            ProviderError::Api { status, message } if status >= 500 => {
                AppError::Network(NetworkError::ServerError { status, message })
            }
            ProviderError::Api { status, message } => {
                AppError::Weather(WeatherError::ApiError(format!("{}: {}", status, message)))
            }
            ProviderError::InvalidApiKey => AppError::Weather(WeatherError::InvalidApiKey),
            ProviderError::Parse(s) => AppError::Network(NetworkError::InvalidResponse(s)),
        }
    }
}
