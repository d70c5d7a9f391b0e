//! Engine configuration

use serde::{Deserialize, Serialize};

use crate::breakpoints::AQI_MAX;
use crate::error::{AqiError, Result};
use crate::history::DEFAULT_RETENTION;

/// Index at which the dashboard starts raising alerts (first non-moderate band)
pub const DEFAULT_ALERT_THRESHOLD: u16 = 101;

/// Tunables owned by the embedding application.
///
/// Band boundaries, breakpoint tables and the stable-slope threshold are fixed
/// and not configurable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Number of index values kept per location
    pub history_retention: usize,
    /// Minimum index that produces an [`AlertNotice`](crate::alert::AlertNotice)
    pub alert_threshold: u16,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            history_retention: DEFAULT_RETENTION,
            alert_threshold: DEFAULT_ALERT_THRESHOLD,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a JSON configuration. Missing fields take defaults.
    ///
    /// # Errors
    ///
    /// * `AqiError::InvalidPayload` - malformed JSON
    /// * `AqiError::InvalidConfig` - value out of range
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// * `AqiError::InvalidConfig` - retention below 2 (no forecast possible) or
    ///   alert threshold above the top of the scale
    pub fn validate(&self) -> Result<()> {
        if self.history_retention < 2 {
            return Err(AqiError::invalid_config(
                "history_retention",
                &self.history_retention.to_string(),
            ));
        }
        if self.alert_threshold > AQI_MAX {
            return Err(AqiError::invalid_config(
                "alert_threshold",
                &self.alert_threshold.to_string(),
            ));
        }
        Ok(())
    }
}
