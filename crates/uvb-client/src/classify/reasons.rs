//! Reason messages returned by the reason-based API and their flag levels.

use super::level::FlagLevel;

/// A test hash was used for the check.
pub const TEST_HASH: &str = "Test hash was used.";
/// The merchant's request quota is exhausted.
pub const OUT_OF_QUOTA: &str = "Run out of request quota for current billing period, upgrade your subscription to resolve!";
/// The merchant has an active exception for this buyer.
pub const EXCEPTION_FOUND: &str = "Active exception found for this hash in your account.";
/// A disposable mailbox was used.
pub const TEMP_EMAIL: &str = "Temporary e-mail was used.";
/// The mailbox does not exist.
pub const MAILBOX_NON_EXISTENT: &str = "Mailbox does not exist.";
/// The service has no history for this buyer.
pub const NOT_FOUND: &str = "No Signals were found.";
/// The buyer's total rate is under the requested threshold.
pub const THRESHOLD_NOT_MET: &str = "Total rate did not meet the minimum threshold set.";
/// The buyer passed all checks.
pub const PASSED: &str = "Signals found, checks passed.";

const STANDARD: &[(&str, FlagLevel)] = &[
    (EXCEPTION_FOUND, FlagLevel::Notice),
    (NOT_FOUND, FlagLevel::Notice),
    (TEST_HASH, FlagLevel::Notice),
    (OUT_OF_QUOTA, FlagLevel::Warning),
    (MAILBOX_NON_EXISTENT, FlagLevel::Error),
    (THRESHOLD_NOT_MET, FlagLevel::Error),
    (TEMP_EMAIL, FlagLevel::Error),
    (PASSED, FlagLevel::Success),
];

const STRICT: &[(&str, FlagLevel)] = &[
    (EXCEPTION_FOUND, FlagLevel::Notice),
    (TEST_HASH, FlagLevel::Notice),
    (NOT_FOUND, FlagLevel::Warning),
    (MAILBOX_NON_EXISTENT, FlagLevel::Error),
    (THRESHOLD_NOT_MET, FlagLevel::Error),
    (TEMP_EMAIL, FlagLevel::Error),
    (OUT_OF_QUOTA, FlagLevel::Error),
    (PASSED, FlagLevel::Success),
];

/// Mapping from reason message to flag level.
///
/// Lookups are total: unknown reasons map to [`FlagLevel::Success`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReasonTable {
    entries: &'static [(&'static str, FlagLevel)],
}

impl Default for ReasonTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl ReasonTable {
    /// Table of the reason-based client library.
    ///
    /// Missing history and test hashes are informational; an exhausted quota
    /// is a warning.
    #[must_use]
    pub const fn standard() -> Self {
        Self { entries: STANDARD }
    }

    /// Stricter table: missing history is a warning and an exhausted quota
    /// is an error.
    #[must_use]
    pub const fn strict() -> Self {
        Self { entries: STRICT }
    }

    /// Builds a table from custom entries.
    #[must_use]
    pub const fn from_entries(entries: &'static [(&'static str, FlagLevel)]) -> Self {
        Self { entries }
    }

    /// Returns the level of `reason`, defaulting to success.
    #[must_use]
    pub fn lookup(&self, reason: &str) -> FlagLevel {
        self.entries
            .iter()
            .find(|(known, _)| *known == reason)
            .map_or(FlagLevel::Success, |(_, level)| *level)
    }

    /// Returns true if `reason` has an explicit entry.
    #[must_use]
    pub fn contains(&self, reason: &str) -> bool {
        self.entries.iter().any(|(known, _)| *known == reason)
    }
}
