use crate::{Config, Coordinate, ProviderResponse, provider::openweather::OpenWeatherProvider};
use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;

pub mod openweather;

/// Ways a provider lookup can fail. The `Display` text is what callers see.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The request could not be completed.
    #[error("failed to fetch weather data: {0}")]
    Request(#[source] reqwest::Error),

    /// The response body could not be read in full.
    #[error("failed to read response body: {0}")]
    Read(#[source] reqwest::Error),

    /// The body was not JSON of the expected shape.
    #[error("failed to decode weather data: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Capability to look up current conditions for a coordinate.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn get_weather(&self, coordinate: &Coordinate) -> Result<ProviderResponse, ProviderError>;
}

/// Construct the provider described by `config`.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.api_key().ok_or_else(|| {
        anyhow::anyhow!(
            "No OpenWeather API key configured.\n\
             Hint: set OPENWEATHER_API_KEY, pass --api-key, or add `api_key` to the config file."
        )
    })?;

    let provider =
        OpenWeatherProvider::new(api_key.to_owned()).with_base_url(&config.base_url);

    Ok(Box::new(provider))
}
