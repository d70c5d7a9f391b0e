//! Error types for the AQI engine

use thiserror::Error;

/// Result type alias for fallible engine operations
pub type Result<T> = std::result::Result<T, AqiError>;

/// Errors that can occur around the AQI engine
///
/// The index computations themselves are total; these cover the fallible edges:
/// signed index conversion, provider payloads, color tokens and configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AqiError {
    /// Index value outside the representable range (e.g. negative)
    #[error("Invalid AQI index: {0}")]
    InvalidIndex(i64),

    /// Pollutant concentration that is negative or not finite
    #[error("Invalid {pollutant} concentration: {value}")]
    InvalidReading { pollutant: &'static str, value: f64 },

    /// Provider returned an empty result set
    #[error("No air quality data available")]
    NoData,

    /// Provider payload could not be parsed
    #[error("Invalid provider payload: {0}")]
    InvalidPayload(String),

    /// Color token is not one of the six severity colors
    #[error("Invalid color token: {0}")]
    InvalidColor(String),

    /// Configuration value out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl AqiError {
    /// Create a new `InvalidReading` error for a specific pollutant
    #[must_use]
    pub fn invalid_reading(pollutant: &'static str, value: f64) -> Self {
        Self::InvalidReading { pollutant, value }
    }

    /// Create a new `InvalidConfig` error for a specific field
    #[must_use]
    pub fn invalid_config(field: &str, value: &str) -> Self {
        Self::InvalidConfig(format!("{field} = {value}"))
    }
}

impl From<serde_json::Error> for AqiError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidPayload(err.to_string())
    }
}
