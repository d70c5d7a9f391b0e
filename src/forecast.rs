//! One-step-ahead AQI forecast from a least-squares trend line

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Slopes with a smaller magnitude than this are reported as stable
pub const STABLE_SLOPE: f64 = 0.5;

const AQI_MAX: f64 = crate::breakpoints::AQI_MAX as f64;
const DEGENERATE_DENOM: f64 = 1e-8;

/// Direction of the fitted trend line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Increasing,
    Decreasing,
    Stable,
}

impl Trend {
    #[must_use]
    pub fn from_slope(slope: f64) -> Self {
        if slope.abs() < STABLE_SLOPE {
            Self::Stable
        } else if slope > 0.0 {
            Self::Increasing
        } else {
            Self::Decreasing
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Increasing => "increasing",
            Self::Decreasing => "decreasing",
            Self::Stable => "stable",
        }
    }

    /// Arrow used on the dashboard
    #[must_use]
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Increasing => "↑",
            Self::Decreasing => "↓",
            Self::Stable => "→",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of [`predict_next`]
///
/// When `valid` is false the history was too short and the numeric fields are zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    /// Predicted index for the next period, clamped to 0..=500
    pub predicted: f64,
    pub slope: f64,
    pub intercept: f64,
    pub trend: Trend,
    pub valid: bool,
}

impl Forecast {
    /// Placeholder for histories with fewer than two points
    #[must_use]
    pub fn insufficient() -> Self {
        Self {
            predicted: 0.0,
            slope: 0.0,
            intercept: 0.0,
            trend: Trend::Stable,
            valid: false,
        }
    }

    /// Prediction rounded to a whole index, `None` when invalid
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn rounded(&self) -> Option<u16> {
        self.valid
            .then(|| self.predicted.round().clamp(0.0, AQI_MAX) as u16)
    }
}

/// Fit `y = intercept + slope * x` over `(i, history[i])` and extrapolate to `x = n`.
///
/// `history` is ordered oldest first.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn predict_next(history: &[u16]) -> Forecast {
    let len = history.len();
    if len < 2 {
        debug!(len, "not enough history for a forecast");
        return Forecast::insufficient();
    }

    let n = len as f64;
    let (mut sum_x, mut sum_y, mut sum_xx, mut sum_xy) = (0.0, 0.0, 0.0, 0.0);
    for (i, &value) in history.iter().enumerate() {
        let x = i as f64;
        let y = f64::from(value);
        sum_x += x;
        sum_y += y;
        sum_xx += x * x;
        sum_xy += x * y;
    }

    let denom = n * sum_xx - sum_x * sum_x;
    if denom.abs() < DEGENERATE_DENOM {
        debug!(denom, "degenerate regression, falling back to the mean");
        return Forecast {
            predicted: sum_y / n,
            slope: 0.0,
            intercept: 0.0,
            trend: Trend::Stable,
            valid: true,
        };
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denom;
    let intercept = (sum_y - slope * sum_x) / n;
    let predicted = (intercept + slope * n).clamp(0.0, AQI_MAX);

    Forecast {
        predicted,
        slope,
        intercept,
        trend: Trend::from_slope(slope),
        valid: true,
    }
}
