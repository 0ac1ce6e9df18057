//! Request payloads for the `/request` and `/signal` endpoints.

use serde::{Serialize, Serializer};

use crate::error::InvalidArgument;

/// Payload of a reputation check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReputationRequest {
    /// Buyer email address.
    pub email: String,
    /// Minimum acceptable reputation, in `[-1, 1]`.
    pub threshold: f64,
}

impl ReputationRequest {
    /// Creates a reputation check payload.
    #[must_use]
    pub fn new(email: impl Into<String>, threshold: f64) -> Self {
        Self {
            email: email.into(),
            threshold,
        }
    }

    /// Validates the payload.
    ///
    /// # Errors
    ///
    /// Returns an error if the email is empty or the threshold is not a
    /// finite number between -1 and 1.
    pub fn validate(&self) -> Result<(), InvalidArgument> {
        require_email(&self.email)?;
        if !self.threshold.is_finite() || !(-1.0..=1.0).contains(&self.threshold) {
            return Err(InvalidArgument::ThresholdOutOfRange(self.threshold));
        }
        Ok(())
    }
}

/// Real-world result of a cash-on-delivery order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Buyer refused or did not pick up the parcel.
    Refused,
    /// Buyer accepted the parcel.
    Delivered,
}

impl Outcome {
    /// Returns the wire value (`-1` or `+1`).
    #[must_use]
    pub const fn value(self) -> i8 {
        match self {
            Self::Refused => -1,
            Self::Delivered => 1,
        }
    }
}

impl TryFrom<i64> for Outcome {
    type Error = InvalidArgument;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Self::Refused),
            1 => Ok(Self::Delivered),
            other => Err(InvalidArgument::InvalidOutcome(other)),
        }
    }
}

impl Serialize for Outcome {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i8(self.value())
    }
}

/// Outcome report for a specific order.
///
/// Optional fields are only sent when set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Signal {
    /// Buyer email address.
    pub email: String,
    /// Delivery outcome.
    pub outcome: Outcome,
    /// Merchant order identifier.
    pub order_id: String,
    /// Shipping country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    /// Shipping postal code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    /// Shipping phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Shipping address line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line: Option<String>,
}

impl Signal {
    /// Creates a signal with no optional fields.
    #[must_use]
    pub fn new(email: impl Into<String>, outcome: Outcome, order_id: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            outcome,
            order_id: order_id.into(),
            country_code: None,
            postal_code: None,
            phone_number: None,
            address_line: None,
        }
    }

    /// Sets the country code.
    #[must_use]
    pub fn with_country_code(mut self, country_code: impl Into<String>) -> Self {
        self.country_code = Some(country_code.into());
        self
    }

    /// Sets the postal code.
    #[must_use]
    pub fn with_postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.postal_code = Some(postal_code.into());
        self
    }

    /// Sets the phone number.
    #[must_use]
    pub fn with_phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }

    /// Sets the address line.
    #[must_use]
    pub fn with_address_line(mut self, address_line: impl Into<String>) -> Self {
        self.address_line = Some(address_line.into());
        self
    }

    /// Validates the signal.
    ///
    /// # Errors
    ///
    /// Returns an error if the email or the order ID is empty.
    pub fn validate(&self) -> Result<(), InvalidArgument> {
        require_email(&self.email)?;
        if self.order_id.trim().is_empty() {
            return Err(InvalidArgument::OrderIdRequired);
        }
        Ok(())
    }
}

fn require_email(email: &str) -> Result<(), InvalidArgument> {
    if email.trim().is_empty() {
        return Err(InvalidArgument::EmailRequired);
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_validation() {
        assert!(ReputationRequest::new("a@b.com", 0.5).validate().is_ok());
        assert!(ReputationRequest::new("a@b.com", -1.0).validate().is_ok());
        assert!(ReputationRequest::new("a@b.com", 1.0).validate().is_ok());

        assert_eq!(
            ReputationRequest::new("", 0.5).validate(),
            Err(InvalidArgument::EmailRequired)
        );
        assert_eq!(
            ReputationRequest::new("a@b.com", 1.5).validate(),
            Err(InvalidArgument::ThresholdOutOfRange(1.5))
        );
        assert!(
            ReputationRequest::new("a@b.com", f64::NAN)
                .validate()
                .is_err()
        );
        assert!(
            ReputationRequest::new("a@b.com", f64::NEG_INFINITY)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn test_request_payload() {
        let body = serde_json::to_value(ReputationRequest::new("a@b.com", 0.5)).unwrap();
        assert_eq!(body, json!({ "email": "a@b.com", "threshold": 0.5 }));
    }

    #[test]
    fn test_outcome_conversion() {
        assert_eq!(Outcome::try_from(-1).unwrap(), Outcome::Refused);
        assert_eq!(Outcome::try_from(1).unwrap(), Outcome::Delivered);
        assert_eq!(
            Outcome::try_from(0),
            Err(InvalidArgument::InvalidOutcome(0))
        );
        assert!(Outcome::try_from(2).is_err());
    }

    #[test]
    fn test_sparse_signal_payload() {
        let signal = Signal::new("a@b.com", Outcome::Delivered, "order-1");
        let body = serde_json::to_value(&signal).unwrap();
        assert_eq!(
            body,
            json!({ "email": "a@b.com", "outcome": 1, "orderId": "order-1" })
        );
        assert_eq!(body.as_object().unwrap().len(), 3);
    }

    #[test]
    fn test_full_signal_payload() {
        let signal = Signal::new("a@b.com", Outcome::Refused, "42")
            .with_country_code("HU")
            .with_postal_code("1111")
            .with_phone_number("+36301234567")
            .with_address_line("Fő utca 1.");
        let body = serde_json::to_value(&signal).unwrap();
        assert_eq!(body["outcome"], json!(-1));
        assert_eq!(body["countryCode"], "HU");
        assert_eq!(body["postalCode"], "1111");
        assert_eq!(body["phoneNumber"], "+36301234567");
        assert_eq!(body["addressLine"], "Fő utca 1.");
    }

    #[test]
    fn test_empty_optional_is_still_sent() {
        let signal = Signal::new("a@b.com", Outcome::Delivered, "1").with_postal_code("");
        let body = serde_json::to_value(&signal).unwrap();
        assert_eq!(body["postalCode"], "");
    }

    #[test]
    fn test_signal_validation() {
        assert!(
            Signal::new("a@b.com", Outcome::Delivered, "1")
                .validate()
                .is_ok()
        );
        assert_eq!(
            Signal::new("", Outcome::Delivered, "1").validate(),
            Err(InvalidArgument::EmailRequired)
        );
        assert_eq!(
            Signal::new("a@b.com", Outcome::Delivered, "").validate(),
            Err(InvalidArgument::OrderIdRequired)
        );
    }
}
