//! Bounded per-location index history

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::config::EngineConfig;
use crate::error::{AqiError, Result};
use crate::forecast::{Forecast, predict_next};

/// Default number of retained index values
pub const DEFAULT_RETENTION: usize = 7;

/// Most recent index values for one location, oldest first.
///
/// Owned by the caller. The forecaster only ever sees a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredHistory")]
pub struct IndexHistory {
    retention: usize,
    values: VecDeque<u16>,
}

/// Unchecked form read back from storage
#[derive(Deserialize)]
struct StoredHistory {
    retention: usize,
    values: Vec<u16>,
}

impl TryFrom<StoredHistory> for IndexHistory {
    type Error = AqiError;

    fn try_from(stored: StoredHistory) -> Result<Self> {
        let mut history = Self::new(stored.retention)?;
        for value in stored.values {
            history.push(value);
        }
        Ok(history)
    }
}

impl Default for IndexHistory {
    fn default() -> Self {
        Self {
            retention: DEFAULT_RETENTION,
            values: VecDeque::with_capacity(DEFAULT_RETENTION),
        }
    }
}

impl IndexHistory {
    /// Create an empty history keeping at most `retention` values
    ///
    /// # Errors
    ///
    /// * `AqiError::InvalidConfig` - `retention` is zero
    pub fn new(retention: usize) -> Result<Self> {
        if retention == 0 {
            return Err(AqiError::invalid_config("history_retention", "0"));
        }
        Ok(Self {
            retention,
            values: VecDeque::with_capacity(retention),
        })
    }

    /// Create an empty history sized from the engine configuration
    ///
    /// # Errors
    ///
    /// * `AqiError::InvalidConfig` - configuration fails validation
    pub fn with_config(config: &EngineConfig) -> Result<Self> {
        config.validate()?;
        Self::new(config.history_retention)
    }

    /// Append the newest index, evicting and returning the oldest once full
    pub fn push(&mut self, index: u16) -> Option<u16> {
        self.values.push_back(index);
        if self.values.len() > self.retention {
            let evicted = self.values.pop_front();
            trace!(?evicted, retention = self.retention, "evicted oldest index");
            evicted
        } else {
            None
        }
    }

    /// Copy of the retained values, oldest first
    #[must_use]
    pub fn snapshot(&self) -> Vec<u16> {
        self.values.iter().copied().collect()
    }

    #[must_use]
    pub fn latest(&self) -> Option<u16> {
        self.values.back().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn retention(&self) -> usize {
        self.retention
    }

    /// Forecast the next period from the retained values
    #[must_use]
    pub fn forecast(&self) -> Forecast {
        predict_next(&self.snapshot())
    }
}
