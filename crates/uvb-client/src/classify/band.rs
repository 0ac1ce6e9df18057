//! Rate-versus-threshold banding.

use serde::{Deserialize, Serialize};

use super::level::FlagLevel;

/// Default width of the absolute warning band.
pub const DEFAULT_WARNING_BAND: f64 = 0.05;

/// Width of the "near miss" band below the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarningBand {
    /// Fixed width: warning iff `threshold - width < rate < threshold`.
    Absolute(f64),
    /// Width proportional to the threshold magnitude:
    /// warning iff `threshold - |threshold| * fraction < rate < threshold`.
    Relative(f64),
}

impl Default for WarningBand {
    fn default() -> Self {
        Self::Absolute(DEFAULT_WARNING_BAND)
    }
}

impl WarningBand {
    /// Lower (exclusive) edge of the warning band.
    #[must_use]
    pub fn lower_edge(self, threshold: f64) -> f64 {
        match self {
            Self::Absolute(width) => threshold - width,
            Self::Relative(fraction) => threshold - threshold.abs() * fraction,
        }
    }

    /// Classifies `rate` against `threshold`.
    ///
    /// Returns `None` when the rate meets the threshold or either input is
    /// NaN.
    #[must_use]
    pub fn classify(self, rate: f64, threshold: f64) -> Option<FlagLevel> {
        if rate.is_nan() || threshold.is_nan() || threshold <= rate {
            return None;
        }

        if rate > self.lower_edge(threshold) {
            Some(FlagLevel::Warning)
        } else {
            Some(FlagLevel::Error)
        }
    }
}
