//! Decoding of the pollutant provider's air pollution payload
//!
//! The payload follows the OpenWeather `air_pollution` response shape:
//!
//! ```json
//! {
//!   "coord": { "lon": 24.94, "lat": 60.17 },
//!   "list": [
//!     {
//!       "dt": 1700000000,
//!       "main": { "aqi": 2 },
//!       "components": { "co": 230.3, "no": 0.1, "no2": 15.2, "o3": 68.0,
//!                       "so2": 3.1, "pm2_5": 12.0, "pm10": 55.0, "nh3": 0.9 }
//!     }
//!   ]
//! }
//! ```
//!
//! Fetching the payload is the caller's job. An empty `list` is reported as
//! [`AqiError::NoData`] so the engine never runs on missing data.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::air_quality::PollutantReading;
use crate::error::{AqiError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    pub lat: f64,
    pub lon: f64,
}

/// Raw response as sent by the provider
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AirPollutionResponse {
    pub coord: Option<Coord>,
    #[serde(default)]
    pub list: Vec<AirData>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AirData {
    pub dt: u64,
    pub main: Main,
    pub components: Components,
}

/// Provider's own 1..=5 index, kept for reference only
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Main {
    pub aqi: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Components {
    #[serde(default)]
    pub co: f64,
    #[serde(default)]
    pub no2: f64,
    #[serde(default)]
    pub o3: f64,
    #[serde(default)]
    pub so2: f64,
    #[serde(default)]
    pub pm2_5: f64,
    #[serde(default)]
    pub pm10: f64,
}

impl From<Components> for PollutantReading {
    fn from(c: Components) -> Self {
        Self {
            pm2_5: c.pm2_5,
            pm10: c.pm10,
            no2: c.no2,
            o3: c.o3,
            so2: c.so2,
            co: c.co,
        }
    }
}

/// One validated measurement from the provider
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProviderSample {
    /// Unix timestamp, seconds
    pub timestamp: u64,
    /// Provider's own 1..=5 index
    pub provider_index: u8,
    pub reading: PollutantReading,
}

impl TryFrom<AirData> for ProviderSample {
    type Error = AqiError;

    fn try_from(data: AirData) -> Result<Self> {
        let reading = PollutantReading::from(data.components);
        reading.validate()?;
        Ok(Self {
            timestamp: data.dt,
            provider_index: data.main.aqi,
            reading,
        })
    }
}

impl AirPollutionResponse {
    /// Parse the raw JSON body
    ///
    /// # Errors
    ///
    /// * `AqiError::InvalidPayload` - malformed JSON or missing fields
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate every entry, in provider order
    ///
    /// # Errors
    ///
    /// * `AqiError::NoData` - empty result list
    /// * `AqiError::InvalidReading` - negative or non-finite concentration
    pub fn into_samples(self) -> Result<Vec<ProviderSample>> {
        if self.list.is_empty() {
            warn!(coord = ?self.coord, "provider returned no air quality data");
            return Err(AqiError::NoData);
        }
        debug!(entries = self.list.len(), "decoding provider samples");
        self.list.into_iter().map(ProviderSample::try_from).collect()
    }
}

/// Decode every sample in a provider payload
///
/// # Errors
///
/// * `AqiError::InvalidPayload` - malformed JSON or missing fields
/// * `AqiError::NoData` - empty result list
/// * `AqiError::InvalidReading` - negative or non-finite concentration
pub fn decode_air_pollution(json: &str) -> Result<Vec<ProviderSample>> {
    AirPollutionResponse::from_json(json)?.into_samples()
}

/// Decode the first sample of a current-conditions payload
///
/// # Errors
///
/// Same as [`decode_air_pollution`].
pub fn latest_sample(json: &str) -> Result<ProviderSample> {
    let mut response = AirPollutionResponse::from_json(json)?;
    if response.list.is_empty() {
        warn!(coord = ?response.coord, "provider returned no air quality data");
        return Err(AqiError::NoData);
    }
    ProviderSample::try_from(response.list.swap_remove(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_debug_snapshot;

    const CURRENT: &str = r#"{
        "coord": { "lon": 24.94, "lat": 60.17 },
        "list": [
            {
                "main": { "aqi": 2 },
                "components": {
                    "co": 230.3, "no": 0.1, "no2": 15.2, "o3": 68.0,
                    "so2": 3.1, "pm2_5": 12.0, "pm10": 55.0, "nh3": 0.9
                },
                "dt": 1700000000
            }
        ]
    }"#;

    #[test]
    fn decode_current_payload() {
        let sample = latest_sample(CURRENT).unwrap();
        assert_debug_snapshot!(sample, @r"
        ProviderSample {
            timestamp: 1700000000,
            provider_index: 2,
            reading: PollutantReading {
                pm2_5: 12.0,
                pm10: 55.0,
                no2: 15.2,
                o3: 68.0,
                so2: 3.1,
                co: 230.3,
            },
        }
        ");
        assert_eq!(sample.reading.aqi(), 51);
    }

    #[test]
    fn coordinates_are_exposed() {
        let response = AirPollutionResponse::from_json(CURRENT).unwrap();
        assert_eq!(
            response.coord,
            Some(Coord {
                lat: 60.17,
                lon: 24.94
            })
        );
    }

    #[test]
    fn history_payload_keeps_order() {
        let json = r#"{"list": [
            {"dt": 1, "main": {"aqi": 1}, "components": {"pm2_5": 5.0, "pm10": 10.0}},
            {"dt": 2, "main": {"aqi": 3}, "components": {"pm2_5": 40.0, "pm10": 10.0}}
        ]}"#;
        let samples = decode_air_pollution(json).unwrap();
        let stamps: Vec<u64> = samples.iter().map(|s| s.timestamp).collect();
        let indices: Vec<u16> = samples.iter().map(|s| s.reading.aqi()).collect();
        assert_eq!(stamps, vec![1, 2]);
        assert_eq!(indices, vec![21, 112]);
    }

    #[test]
    fn empty_list_is_no_data() {
        let json = r#"{"coord": {"lon": 0.0, "lat": 0.0}, "list": []}"#;
        assert_eq!(latest_sample(json), Err(AqiError::NoData));
        assert_eq!(decode_air_pollution(json), Err(AqiError::NoData));
        assert_eq!(decode_air_pollution("{}"), Err(AqiError::NoData));
    }

    #[test]
    fn malformed_payload() {
        assert!(matches!(
            latest_sample("<html>502 Bad Gateway</html>"),
            Err(AqiError::InvalidPayload(_))
        ));
        assert!(matches!(
            latest_sample(r#"{"list": [{"dt": 1}]}"#),
            Err(AqiError::InvalidPayload(_))
        ));
    }

    #[test]
    fn negative_concentration_is_rejected() {
        let json = r#"{"list": [
            {"dt": 1, "main": {"aqi": 1}, "components": {"pm2_5": -2.0, "pm10": 10.0}}
        ]}"#;
        assert_eq!(
            latest_sample(json),
            Err(AqiError::invalid_reading("PM2.5", -2.0))
        );
    }
}
