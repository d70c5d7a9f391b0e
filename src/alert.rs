//! High-AQI alert notices
//!
//! Only the text is produced here; delivering it (push notification, banner)
//! is up to the embedding application.

use serde::{Deserialize, Serialize};

use crate::category::{AqiCategory, AqiColor};
use crate::config::EngineConfig;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertNotice {
    pub index: u16,
    pub category: AqiCategory,
    pub color: AqiColor,
    pub title: String,
    pub body: String,
}

impl AlertNotice {
    /// Build a notice when `index` reaches `threshold`, `None` otherwise
    #[must_use]
    pub fn for_index(index: u16, threshold: u16) -> Option<Self> {
        if index < threshold {
            return None;
        }

        let category = AqiCategory::from_index(index);
        Some(Self {
            index,
            category,
            color: category.color(),
            title: format!("⚠️ High AQI Alert: {category}"),
            body: format!("Current AQI is {index}. {}", category.health_alert()),
        })
    }

    /// Same as [`AlertNotice::for_index`] with the configured threshold
    #[must_use]
    pub fn with_config(index: u16, config: &EngineConfig) -> Option<Self> {
        Self::for_index(index, config.alert_threshold)
    }
}
