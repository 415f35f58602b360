use axum::{
    extract::{Query, State, rejection::QueryRejection},
    http::header,
    response::IntoResponse,
};
use tracing::info;
use weather_core::{Coordinate, WeatherReport};

use crate::{error::ApiError, state::AppState};

/// Query parameters of `/weather`. A repeated key keeps its first value.
#[derive(Debug, Default)]
pub struct WeatherParams {
    pub lat: Option<String>,
    pub long: Option<String>,
}

impl WeatherParams {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();

        for (key, value) in pairs {
            let slot = match key.as_str() {
                "lat" => &mut params.lat,
                "long" => &mut params.long,
                _ => continue,
            };
            slot.get_or_insert(value);
        }

        params
    }

    /// Both parts must be present and non-empty. No other validation is applied.
    pub fn coordinate(self) -> Option<Coordinate> {
        match (self.lat, self.long) {
            (Some(lat), Some(long)) if !lat.is_empty() && !long.is_empty() => {
                Some(Coordinate::new(lat, long))
            }
            _ => None,
        }
    }
}

/// `GET /weather?lat=<lat>&long=<long>`
pub async fn weather(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let params = query
        .map(|Query(pairs)| WeatherParams::from_pairs(pairs))
        .unwrap_or_default();

    info!(
        lat = params.lat.as_deref().unwrap_or_default(),
        long = params.long.as_deref().unwrap_or_default(),
        "Weather requested"
    );

    let coordinate = params.coordinate().ok_or(ApiError::MissingCoordinate)?;

    let response = state.provider.get_weather(&coordinate).await?;
    let report = WeatherReport::from_response(&response);

    info!("Weather condition: {}", report.condition);
    info!("Temperature in Celsius: {:.2}", report.celsius);
    info!("Temperature in Fahrenheit: {:.2}", report.fahrenheit);

    Ok(([(header::CONTENT_TYPE, "text/plain")], format!("{report}\n")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(lat: Option<&str>, long: Option<&str>) -> WeatherParams {
        WeatherParams {
            lat: lat.map(str::to_owned),
            long: long.map(str::to_owned),
        }
    }

    #[test]
    fn coordinate_requires_both_parts() {
        assert!(params(None, None).coordinate().is_none());
        assert!(params(Some("10"), None).coordinate().is_none());
        assert!(params(None, Some("20")).coordinate().is_none());
        assert!(params(Some(""), Some("20")).coordinate().is_none());
        assert!(params(Some("10"), Some("")).coordinate().is_none());
    }

    #[test]
    fn coordinate_is_forwarded_verbatim() {
        let params = params(Some("not-a-number"), Some(" 20"));

        let coordinate = params.coordinate().unwrap();

        assert_eq!(coordinate, Coordinate::new("not-a-number", " 20"));
    }

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn repeated_keys_keep_first_value() {
        let params = WeatherParams::from_pairs(pairs(&[
            ("lat", "10"),
            ("lat", "11"),
            ("long", "20"),
            ("long", "21"),
        ]));

        assert_eq!(params.coordinate(), Some(Coordinate::new("10", "20")));
    }

    #[test]
    fn empty_first_value_wins_over_later_value() {
        let params =
            WeatherParams::from_pairs(pairs(&[("lat", ""), ("lat", "10"), ("long", "20")]));

        assert!(params.coordinate().is_none());
    }

    #[test]
    fn unrelated_keys_are_ignored() {
        let params = WeatherParams::from_pairs(pairs(&[
            ("units", "metric"),
            ("lat", "1"),
            ("long", "2"),
        ]));

        assert_eq!(params.coordinate(), Some(Coordinate::new("1", "2")));
    }
}
