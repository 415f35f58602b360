use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::{
    config::DEFAULT_BASE_URL,
    model::{Condition, Coordinate, ProviderResponse},
};

use super::{ProviderError, WeatherProvider};

const CURRENT_WEATHER_PATH: &str = "/data/2.5/weather";

#[derive(Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            http: Client::new(),
        }
    }

    /// Point the client at another host, e.g. a local mock server.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    fn current_weather_url(&self) -> String {
        format!("{}{}", self.base_url, CURRENT_WEATHER_PATH)
    }

    async fn fetch_current(
        &self,
        coordinate: &Coordinate,
    ) -> Result<ProviderResponse, ProviderError> {
        debug!(
            lat = %coordinate.latitude,
            lon = %coordinate.longitude,
            "Requesting current weather"
        );

        // without_url keeps the appid out of error text returned to clients
        let res = self
            .http
            .get(self.current_weather_url())
            .query(&[
                ("lat", coordinate.latitude.as_str()),
                ("lon", coordinate.longitude.as_str()),
                ("appid", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| ProviderError::Request(e.without_url()))?;

        let status = res.status();
        if !status.is_success() {
            warn!(%status, "OpenWeather responded with a non-success status");
        }

        let body = res
            .bytes()
            .await
            .map_err(|e| ProviderError::Read(e.without_url()))?;

        let parsed: OwCurrentResponse = serde_json::from_slice(&body)?;

        Ok(parsed.into())
    }
}

impl std::fmt::Debug for OpenWeatherProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenWeatherProvider")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    main: OwMain,
    // absent and null both mean "no conditions"
    #[serde(default)]
    weather: Option<Vec<OwWeather>>,
}

impl From<OwCurrentResponse> for ProviderResponse {
    fn from(resp: OwCurrentResponse) -> Self {
        ProviderResponse {
            temperature_kelvin: resp.main.temp,
            conditions: resp
                .weather
                .unwrap_or_default()
                .into_iter()
                .map(|w| Condition {
                    description: w.description,
                })
                .collect(),
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn get_weather(
        &self,
        coordinate: &Coordinate,
    ) -> Result<ProviderResponse, ProviderError> {
        self.fetch_current(coordinate).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let provider = OpenWeatherProvider::new("KEY".into());
        let provider = provider.with_base_url("http://localhost:9/");
        assert_eq!(
            provider.current_weather_url(),
            "http://localhost:9/data/2.5/weather"
        );
    }

    #[test]
    fn debug_output_hides_api_key() {
        let provider = OpenWeatherProvider::new("SECRET".into());
        let dbg = format!("{provider:?}");

        assert!(!dbg.contains("SECRET"));
        assert!(dbg.contains("<redacted>"));
    }

    #[test]
    fn missing_weather_array_decodes_as_empty() {
        let body = r#"{"main":{"temp":280.0}}"#;
        let parsed: OwCurrentResponse = serde_json::from_str(body).unwrap();
        let resp = ProviderResponse::from(parsed);

        assert_eq!(resp.temperature_kelvin, 280.0);
        assert!(resp.conditions.is_empty());
    }

    #[test]
    fn null_weather_array_decodes_as_empty() {
        let body = r#"{"main":{"temp":281.0},"weather":null}"#;
        let parsed: OwCurrentResponse = serde_json::from_str(body).unwrap();
        let resp = ProviderResponse::from(parsed);

        assert_eq!(resp.temperature_kelvin, 281.0);
        assert!(resp.conditions.is_empty());
    }

    #[test]
    fn extra_fields_are_ignored() {
        let body = r#"{"coord":{"lon":20,"lat":10},"main":{"temp":290.5,"humidity":40},
            "weather":[{"id":800,"main":"Clear","description":"clear sky"}],"name":"X"}"#;
        let parsed: OwCurrentResponse = serde_json::from_str(body).unwrap();
        let resp = ProviderResponse::from(parsed);

        assert_eq!(
            resp.conditions,
            vec![Condition {
                description: "clear sky".into()
            }]
        );
    }
}
