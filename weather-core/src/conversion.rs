//! Unit conversion and temperature bucketing.

use std::fmt;

use crate::model::ProviderResponse;

const KELVIN_OFFSET: f64 = 273.15;

pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - KELVIN_OFFSET
}

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Coarse classification of a Celsius temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureCategory {
    Cold,
    Moderate,
    Hot,
}

impl TemperatureCategory {
    /// Below 5ºC is cold, above 25ºC is hot. Both bounds are moderate.
    pub fn from_celsius(celsius: f64) -> Self {
        if celsius < 5.0 {
            TemperatureCategory::Cold
        } else if celsius > 25.0 {
            TemperatureCategory::Hot
        } else {
            TemperatureCategory::Moderate
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TemperatureCategory::Cold => "cold",
            TemperatureCategory::Moderate => "moderate",
            TemperatureCategory::Hot => "hot",
        }
    }
}

impl fmt::Display for TemperatureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Description of the first reported condition, or `""` when there is none.
pub fn condition_description(response: &ProviderResponse) -> &str {
    response
        .conditions
        .first()
        .map(|c| c.description.as_str())
        .unwrap_or_default()
}
