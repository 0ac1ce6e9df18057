//! Flag data models.

use chrono::{DateTime, Utc};
use uvb_client::{Classifier, FlagLevel, label_for};

/// Flag stored for an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderFlag {
    /// Merchant order identifier.
    pub order_id: String,
    /// Stored value (reason message or level identifier).
    pub value: String,
    /// When the flag was written.
    pub flagged_at: DateTime<Utc>,
}

impl OrderFlag {
    /// Creates a flag stamped with the current time.
    #[must_use]
    pub fn new(order_id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            order_id: order_id.into(),
            value: value.into(),
            flagged_at: Utc::now(),
        }
    }

    /// Renders the flag for display.
    #[must_use]
    pub fn display(&self, classifier: &Classifier) -> FlagDisplay {
        FlagDisplay {
            level: classifier.stored_level(&self.value),
            label: label_for(&self.value).to_string(),
        }
    }
}

/// Back-office rendering of a stored flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagDisplay {
    /// Severity.
    pub level: FlagLevel,
    /// Human-readable label.
    pub label: String,
}
