//! Overall AQI from pollutant concentrations

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::breakpoints::{PM10_BREAKPOINTS, PM25_BREAKPOINTS, sub_index};
use crate::category::{AqiCategory, AqiColor};
use crate::error::{AqiError, Result};

/// Pollutant concentrations as reported by the provider.
///
/// All values are μg/m³, except `co` which is left in the provider's native
/// unit. Only `pm2_5` and `pm10` feed the index.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PollutantReading {
    pub pm2_5: f64,
    pub pm10: f64,
    pub no2: f64,
    pub o3: f64,
    pub so2: f64,
    pub co: f64,
}

impl PollutantReading {
    /// Check that every concentration is finite and non-negative
    ///
    /// # Errors
    ///
    /// * `AqiError::InvalidReading` - first offending pollutant
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("PM2.5", self.pm2_5),
            ("PM10", self.pm10),
            ("NO2", self.no2),
            ("O3", self.o3),
            ("SO2", self.so2),
            ("CO", self.co),
        ];
        match fields
            .into_iter()
            .find(|(_, value)| !value.is_finite() || *value < 0.0)
        {
            Some((pollutant, value)) => Err(AqiError::invalid_reading(pollutant, value)),
            None => Ok(()),
        }
    }

    /// Overall index for this reading
    #[must_use]
    pub fn aqi(&self) -> u16 {
        calculate_overall_aqi(self.pm2_5, self.pm10, self.no2, self.o3, self.so2, self.co)
    }
}

/// Sub-index from a PM2.5 concentration (μg/m³)
#[must_use]
pub fn calculate_aqi_from_pm25(pm2_5: f64) -> u16 {
    sub_index(&PM25_BREAKPOINTS, pm2_5)
}

/// Sub-index from a PM10 concentration (μg/m³)
#[must_use]
pub fn calculate_aqi_from_pm10(pm10: f64) -> u16 {
    sub_index(&PM10_BREAKPOINTS, pm10)
}

/// Overall index: the worse of the PM2.5 and PM10 sub-indices.
///
/// `no2`, `o3`, `so2` and `co` are accepted so callers can pass a full reading,
/// but they do not influence the result.
#[must_use]
pub fn calculate_overall_aqi(
    pm2_5: f64,
    pm10: f64,
    _no2: f64,
    _o3: f64,
    _so2: f64,
    _co: f64,
) -> u16 {
    let from_pm25 = calculate_aqi_from_pm25(pm2_5);
    let from_pm10 = calculate_aqi_from_pm10(pm10);
    debug!(pm2_5, pm10, from_pm25, from_pm10, "computed AQI sub-indices");
    from_pm25.max(from_pm10)
}

/// Index plus everything the dashboard shows alongside it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AqiReport {
    pub index: u16,
    pub category: AqiCategory,
    pub color: AqiColor,
    pub advisory: &'static str,
    pub measures: &'static [&'static str],
}

impl AqiReport {
    #[must_use]
    pub fn from_index(index: u16) -> Self {
        let category = AqiCategory::from_index(index);
        Self {
            index,
            category,
            color: category.color(),
            advisory: category.health_alert(),
            measures: category.preventive_measures(),
        }
    }
}

/// Compute the full report for a reading
#[must_use]
pub fn assess(reading: &PollutantReading) -> AqiReport {
    AqiReport::from_index(reading.aqi())
}
