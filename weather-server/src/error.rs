//! Translation of request failures into plain-text HTTP responses.

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use thiserror::Error;
use weather_core::ProviderError;

pub const MISSING_COORDINATE: &str = "Latitude and longitude are required";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{}", MISSING_COORDINATE)]
    MissingCoordinate,

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingCoordinate => StatusCode::BAD_REQUEST,
            Self::Provider(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Provider(err) = &self {
            tracing::error!(error = %err, "Weather provider call failed");
        }

        (
            self.status(),
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            format!("{self}\n"),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_coordinate_maps_to_bad_request() {
        let err = ApiError::MissingCoordinate;

        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Latitude and longitude are required");
    }

    #[test]
    fn provider_error_maps_to_internal_error_with_same_text() {
        let json_err = serde_json::from_str::<serde_json::Value>("[").unwrap_err();
        let provider_err = ProviderError::from(json_err);
        let expected = provider_err.to_string();

        let err = ApiError::from(provider_err);

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), expected);
    }
}
