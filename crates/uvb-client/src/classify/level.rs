//! Flag levels and their display labels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Severity of an order flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlagLevel {
    /// Checks passed.
    Success,
    /// Informational, no action needed.
    Notice,
    /// Uncertain result.
    Warning,
    /// Risky buyer.
    Error,
}

impl FlagLevel {
    /// Returns the lowercase identifier (`success`, `notice`, `warning`, `error`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Notice => "notice",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    /// Returns the back-office display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Success => "Rendben.",
            Self::Notice => "Megjegyzés.",
            Self::Warning => "Bizonytalan eredmény.",
            Self::Error => "Figyelem!",
        }
    }

    /// Parses a lowercase identifier. Returns `None` for anything else.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "success" => Some(Self::Success),
            "notice" => Some(Self::Notice),
            "warning" => Some(Self::Warning),
            "error" => Some(Self::Error),
            _ => None,
        }
    }
}

impl fmt::Display for FlagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown flag level.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown flag level: {0}")]
pub struct ParseFlagLevelError(String);

impl FromStr for FlagLevel {
    type Err = ParseFlagLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseFlagLevelError(s.to_string()))
    }
}

/// Display label of a stored flag value.
///
/// `error` and `warning` literals get their level label; any other value
/// (typically a service reason message) is shown unchanged.
#[must_use]
pub fn label_for(stored: &str) -> &str {
    match stored {
        "error" => FlagLevel::Error.label(),
        "warning" => FlagLevel::Warning.label(),
        other => other,
    }
}
