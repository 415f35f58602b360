use std::fmt;

use crate::conversion::{
    TemperatureCategory, celsius_to_fahrenheit, condition_description, kelvin_to_celsius,
};
use crate::model::ProviderResponse;

/// Human-facing summary derived from a single provider response.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub condition: String,
    pub celsius: f64,
    pub fahrenheit: f64,
    pub category: TemperatureCategory,
}

impl WeatherReport {
    pub fn from_response(response: &ProviderResponse) -> Self {
        let celsius = kelvin_to_celsius(response.temperature_kelvin);

        Self {
            condition: condition_description(response).to_owned(),
            celsius,
            fahrenheit: celsius_to_fahrenheit(celsius),
            category: TemperatureCategory::from_celsius(celsius),
        }
    }
}

/// Renders the two-line summary, without a trailing newline.
impl fmt::Display for WeatherReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Weather condition: {}\nTemperature: {:.2}ºC ({:.2}ºF) ({})",
            self.condition, self.celsius, self.fahrenheit, self.category
        )
    }
}
