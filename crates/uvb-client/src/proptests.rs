//! Property-based tests for classification and request validation.
//!
//! - Rate banding partitions the number line into pass / warning / error
//! - Reason lookup is total and fails open
//! - Validation rejects out-of-range thresholds and outcomes

use proptest::prelude::*;

use crate::classify::{Assessment, Classifier, DEFAULT_WARNING_BAND, FlagLevel, ReasonTable};
use crate::error::InvalidArgument;
use crate::payload::{Outcome, ReputationRequest};

proptest! {
    /// A rate at or above the threshold is never flagged.
    #[test]
    fn rate_meeting_threshold_is_not_flagged(
        threshold in -1.0f64..=1.0,
        delta in 0.0f64..2.0,
    ) {
        let rate = threshold + delta;
        let level = Classifier::new().classify(&Assessment::RateBased { rate, threshold });
        prop_assert_eq!(level, None);
    }

    /// The absolute band splits failing rates into warning and error.
    #[test]
    fn rate_below_threshold_is_banded(
        threshold in -1.0f64..=1.0,
        rate in -2.0f64..=2.0,
    ) {
        let level = Classifier::new().classify(&Assessment::RateBased { rate, threshold });
        let lower = threshold - DEFAULT_WARNING_BAND;

        if rate >= threshold {
            prop_assert_eq!(level, None);
        } else if lower < rate {
            prop_assert_eq!(level, Some(FlagLevel::Warning));
        } else {
            prop_assert_eq!(level, Some(FlagLevel::Error));
        }
    }

    /// Classification is total for any finite pair, even outside [-1, 1].
    #[test]
    fn classify_is_total_for_finite_input(
        rate in proptest::num::f64::NORMAL,
        threshold in proptest::num::f64::NORMAL,
    ) {
        let _ = Classifier::new().classify(&Assessment::RateBased { rate, threshold });
    }

    /// Unknown reason strings fail open to success.
    #[test]
    fn unknown_reasons_map_to_success(reason in "[a-z ]{0,40}") {
        let table = ReasonTable::standard();
        prop_assume!(!table.contains(&reason));
        prop_assert_eq!(table.lookup(&reason), FlagLevel::Success);
    }

    /// Thresholds outside [-1, 1] are rejected before any request is made.
    #[test]
    fn out_of_range_threshold_rejected(excess in 0.0001f64..100.0, negative in any::<bool>()) {
        let threshold = if negative { -1.0 - excess } else { 1.0 + excess };
        let result = ReputationRequest::new("a@b.com", threshold).validate();
        prop_assert_eq!(result, Err(InvalidArgument::ThresholdOutOfRange(threshold)));
    }

    /// Only -1 and +1 are valid outcomes.
    #[test]
    fn outcome_accepts_only_unit_values(value in any::<i64>()) {
        let result = Outcome::try_from(value);
        prop_assert_eq!(result.is_ok(), value == -1 || value == 1);
    }
}
