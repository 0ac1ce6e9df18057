//! Order snapshot and lifecycle events.

use uvb_client::{Outcome, Signal};

/// Order lifecycle points the connector reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderEvent {
    /// A new order was placed.
    Created,
    /// The order was delivered and paid.
    Completed,
    /// The buyer did not pick up the parcel.
    NotReceived,
}

impl OrderEvent {
    /// Outcome reported for this event, if any.
    #[must_use]
    pub const fn outcome(self) -> Option<Outcome> {
        match self {
            Self::Created => None,
            Self::Completed => Some(Outcome::Delivered),
            Self::NotReceived => Some(Outcome::Refused),
        }
    }
}

/// Shipping details of an order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShippingAddress {
    /// ISO country code.
    pub country: String,
    /// Postal code.
    pub postcode: String,
    /// Phone number.
    pub phone: String,
    /// First address line.
    pub address_1: String,
    /// Second address line.
    pub address_2: String,
}

impl ShippingAddress {
    /// Both address lines joined by a space.
    #[must_use]
    pub fn address_line(&self) -> String {
        format!("{} {}", self.address_1.trim(), self.address_2.trim())
            .trim()
            .to_string()
    }
}

/// The parts of a shop order the connector needs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Order {
    /// Merchant order identifier.
    pub id: String,
    /// Billing email address.
    pub billing_email: String,
    /// Shipping details.
    pub shipping: ShippingAddress,
}

impl Order {
    /// Creates an order without shipping details.
    #[must_use]
    pub fn new(id: impl Into<String>, billing_email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            billing_email: billing_email.into(),
            shipping: ShippingAddress::default(),
        }
    }

    /// Sets the shipping details.
    #[must_use]
    pub fn with_shipping(mut self, shipping: ShippingAddress) -> Self {
        self.shipping = shipping;
        self
    }

    /// Builds the outcome signal for this order.
    ///
    /// Blank shipping fields are left out of the signal.
    #[must_use]
    pub fn signal(&self, outcome: Outcome) -> Signal {
        let mut signal = Signal::new(&self.billing_email, outcome, &self.id);
        signal.country_code = non_blank(&self.shipping.country);
        signal.postal_code = non_blank(&self.shipping.postcode);
        signal.phone_number = non_blank(&self.shipping.phone);
        signal.address_line = non_blank(&self.shipping.address_line());
        signal
    }
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
