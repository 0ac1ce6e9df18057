//! Classification of reputation results into flag levels.
//!
//! Two scoring schemes are supported:
//!
//! - **Reason-based**: the service returns a discrete reason message, looked
//!   up in a [`ReasonTable`].
//! - **Rate-based**: the service returns a continuous rate, compared to the
//!   merchant threshold with a [`WarningBand`].
//!
//! Classification is a pure function of its input and never fails. Unknown
//! input degrades to the most permissive outcome.

mod band;
mod level;
pub mod reasons;

pub use band::{DEFAULT_WARNING_BAND, WarningBand};
pub use level::{FlagLevel, ParseFlagLevelError, label_for};
pub use reasons::ReasonTable;

/// Classifier input.
#[derive(Debug, Clone, PartialEq)]
pub enum Assessment {
    /// Continuous rate compared against a threshold.
    RateBased {
        /// Service-computed rate.
        rate: f64,
        /// Merchant threshold.
        threshold: f64,
    },
    /// Discrete reason message.
    ReasonBased {
        /// Reason message from the service.
        reason: String,
    },
}

/// Maps assessments to flag levels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Classifier {
    band: WarningBand,
    reasons: ReasonTable,
}

impl Classifier {
    /// Creates a classifier with the default band and the standard table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the warning band.
    #[must_use]
    pub const fn with_band(mut self, band: WarningBand) -> Self {
        self.band = band;
        self
    }

    /// Sets the reason table.
    #[must_use]
    pub const fn with_reasons(mut self, reasons: ReasonTable) -> Self {
        self.reasons = reasons;
        self
    }

    /// Returns the warning band.
    #[must_use]
    pub const fn band(&self) -> WarningBand {
        self.band
    }

    /// Classifies an assessment.
    ///
    /// Returns `None` when nothing should be flagged (rate meets the
    /// threshold). Reason-based input always yields a level.
    #[must_use]
    pub fn classify(&self, assessment: &Assessment) -> Option<FlagLevel> {
        match assessment {
            Assessment::RateBased { rate, threshold } => self.band.classify(*rate, *threshold),
            Assessment::ReasonBased { reason } => Some(self.reasons.lookup(reason)),
        }
    }

    /// Level of a previously stored flag value.
    ///
    /// Accepts level identifiers (`warning`, `error`, ...) as well as reason
    /// messages.
    #[must_use]
    pub fn stored_level(&self, stored: &str) -> FlagLevel {
        FlagLevel::parse(stored).unwrap_or_else(|| self.reasons.lookup(stored))
    }
}
