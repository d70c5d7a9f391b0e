//! Air Quality Index engine
//!
//! This crate turns raw pollutant concentrations into an Air Quality Index and
//! forecasts the next value from a short index history:
//! - EPA breakpoint interpolation for PM2.5 and PM10
//! - Health bands with color, advisory text and preventive measures
//! - Least-squares trend forecast over a bounded history
//! - Decoding of the pollutant provider's JSON payload
//!
//! Every computation is a pure function of its inputs.
//!
//! # Example
//!
//! ```rust
//! use aqi_forecast::{IndexHistory, PollutantReading, Trend, assess};
//!
//! let reading = PollutantReading {
//!     pm2_5: 12.0,
//!     pm10: 55.0,
//!     ..PollutantReading::default()
//! };
//! let report = assess(&reading);
//! assert_eq!(report.index, 51);
//! println!("{} ({})", report.category, report.color);
//!
//! let mut history = IndexHistory::default();
//! for index in [50, 52, 54, 56] {
//!     history.push(index);
//! }
//! let forecast = history.forecast();
//! assert_eq!(forecast.rounded(), Some(58));
//! assert_eq!(forecast.trend, Trend::Increasing);
//! ```

pub mod air_quality;
pub mod alert;
pub mod breakpoints;
pub mod category;
pub mod config;
pub mod error;
pub mod forecast;
pub mod history;
pub mod provider;

pub use air_quality::{
    AqiReport, PollutantReading, assess, calculate_aqi_from_pm10, calculate_aqi_from_pm25,
    calculate_overall_aqi,
};
pub use alert::AlertNotice;
pub use category::{
    AqiCategory, AqiColor, aqi_category, aqi_color, health_alert, preventive_measures,
};
pub use config::EngineConfig;
pub use error::{AqiError, Result};
pub use forecast::{Forecast, Trend, predict_next};
pub use history::IndexHistory;
pub use provider::{ProviderSample, decode_air_pollution, latest_sample};

/// Decode a current-conditions payload and assess it in one step
///
/// # Arguments
///
/// * `json` - Raw provider response body
///
/// # Returns
///
/// * `Ok((ProviderSample, AqiReport))` - The decoded sample and its report
/// * `Err(AqiError)` - The payload had no usable data
///
/// # Errors
///
/// * `AqiError::InvalidPayload` - Malformed JSON
/// * `AqiError::NoData` - Empty result set
/// * `AqiError::InvalidReading` - Negative or non-finite concentration
pub fn assess_payload(json: &str) -> Result<(ProviderSample, AqiReport)> {
    let sample = latest_sample(json)?;
    let report = assess(&sample.reading);
    Ok((sample, report))
}
