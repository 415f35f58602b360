//! Core library for the weather summary service.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The weather provider abstraction and its OpenWeather client
//! - Temperature conversion, categorization and the rendered report
//!
//! It is used by `weather-server`, but has no dependency on any HTTP server framework.

pub mod config;
pub mod conversion;
pub mod model;
pub mod provider;
pub mod report;

pub use config::Config;
pub use conversion::TemperatureCategory;
pub use model::{Condition, Coordinate, ProviderResponse};
pub use provider::{ProviderError, WeatherProvider, provider_from_config};
pub use report::WeatherReport;
