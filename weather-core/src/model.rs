use serde::{Deserialize, Serialize};

/// A location as received from the caller.
///
/// Both parts are kept verbatim; no numeric parsing or range checks happen
/// before they are forwarded to the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinate {
    pub latitude: String,
    pub longitude: String,
}

impl Coordinate {
    pub fn new(latitude: impl Into<String>, longitude: impl Into<String>) -> Self {
        Self {
            latitude: latitude.into(),
            longitude: longitude.into(),
        }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub description: String,
}

/// Current conditions as reported by the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderResponse {
    /// Absolute temperature in Kelvin.
    pub temperature_kelvin: f64,
    /// Only the first entry is ever shown; an empty list is valid.
    pub conditions: Vec<Condition>,
}
