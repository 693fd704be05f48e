//! Authenticated GET + JSON decode.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::api::ApiErrorBody;
use crate::types::WeatherError;

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
const USER_AGENT: &str = concat!("laiks/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Arc<Client>,
    api_key: String,
}

impl HttpFetcher {
    pub fn new(api_key: impl Into<String>, timeout: Duration) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client: Arc::new(client),
            api_key: api_key.into(),
        })
    }

    /// Append the `appid` parameter to an endpoint URL
    fn authorize(&self, url: &str) -> String {
        let sep = if url.contains('?') { '&' } else { '?' };
        format!("{}{}appid={}", url, sep, urlencoding::encode(&self.api_key))
    }

    /// Issue one GET request and decode the body as `T`.
    ///
    /// No retry. Non-2xx answers become `WeatherError::Api` (401 becomes
    /// `InvalidApiKey`), an undecodable body becomes `WeatherError::Parse`.
    pub async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T, WeatherError> {
        // The key is appended here so it never shows up in logs
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(self.authorize(url))
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let err = api_error(status, &text);
            tracing::warn!("Request to {} failed: {}", url, err);
            return Err(err);
        }

        let bytes = response.bytes().await.map_err(classify)?;
        serde_json::from_slice(&bytes).map_err(|e| {
            tracing::warn!("Failed to decode response from {}: {}", url, e);
            WeatherError::Parse(e.to_string())
        })
    }
}

fn classify(e: reqwest::Error) -> WeatherError {
    if e.is_timeout() {
        WeatherError::Timeout
    } else {
        WeatherError::Network(e)
    }
}

fn api_error(status: StatusCode, body: &str) -> WeatherError {
    if status == StatusCode::UNAUTHORIZED {
        return WeatherError::InvalidApiKey;
    }

    let message = serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string()
        });

    WeatherError::Api {
        status: status.as_u16(),
        message,
    }
}
