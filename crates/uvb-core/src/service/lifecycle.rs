//! Order lifecycle service.
//!
//! Checks new orders against the reputation service, stores the resulting
//! flag, and reports delivery outcomes when orders complete or are refused.
//! Service outages never fail an operation: the order is simply left
//! unflagged or the signal is dropped.

use tracing::{debug, info};
use uvb_client::{
    Classifier, FlagLevel, HttpTransport, Outcome, Reputation, ReputationClient, Transport,
};

use super::order::{Order, OrderEvent};
use crate::Result;
use crate::flag::{FlagDisplay, FlagRepository, OrderFlag};
use crate::settings::Settings;

/// Result of handling a lifecycle event.
#[derive(Debug, Clone, PartialEq)]
pub enum EventResult {
    /// Order was checked. `None` when nothing was flagged.
    Flagged(Option<FlagLevel>),
    /// Outcome was reported. `None` when the service did not acknowledge.
    Reported(Option<serde_json::Value>),
}

/// Order lifecycle service.
#[derive(Debug)]
pub struct OrderService<T = HttpTransport> {
    client: ReputationClient<T>,
    classifier: Classifier,
    threshold: f64,
    flag_orders: bool,
    flags: FlagRepository,
}

impl OrderService<HttpTransport> {
    /// Creates a service from settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings are invalid, credentials cannot be
    /// resolved, or the HTTP client cannot be built.
    pub fn new(settings: &Settings, flags: FlagRepository) -> Result<Self> {
        settings.validate()?;
        let client = ReputationClient::with_config(settings.credentials()?, settings.client_config())?;
        Ok(Self::with_client(client, settings, flags))
    }
}

impl<T: Transport> OrderService<T> {
    /// Creates a service on top of an existing client.
    #[must_use]
    pub fn with_client(client: ReputationClient<T>, settings: &Settings, flags: FlagRepository) -> Self {
        Self {
            client,
            classifier: settings.classifier(),
            threshold: settings.reputation_threshold,
            flag_orders: settings.flag_orders,
            flags,
        }
    }

    /// Returns the flag repository.
    #[must_use]
    pub const fn flags(&self) -> &FlagRepository {
        &self.flags
    }

    /// Dispatches a lifecycle event.
    ///
    /// # Errors
    ///
    /// Returns an error if the order data is invalid or storage fails.
    pub async fn handle(&self, event: OrderEvent, order: &Order) -> Result<EventResult> {
        debug!(?event, order_id = %order.id, "Handling order event");
        match event.outcome() {
            None => self.flag_order(order).await.map(EventResult::Flagged),
            Some(outcome) => self
                .report_outcome(order, outcome)
                .await
                .map(EventResult::Reported),
        }
    }

    /// Checks a new order and stores its flag.
    ///
    /// Reason answers store the reason message; rate answers store the level
    /// identifier and nothing when the threshold is met.
    ///
    /// # Errors
    ///
    /// Returns an error if the billing email is empty or storage fails.
    pub async fn flag_order(&self, order: &Order) -> Result<Option<FlagLevel>> {
        if !self.flag_orders {
            debug!(order_id = %order.id, "Order flagging disabled");
            return Ok(None);
        }

        let Some(reputation) = self
            .client
            .check_reputation(&order.billing_email, self.threshold)
            .await?
        else {
            return Ok(None);
        };

        let level = self
            .classifier
            .classify(&reputation.assessment(self.threshold));

        let value = match (&reputation, level) {
            (Reputation::Reason(result), _) if !result.reason.is_empty() => result.reason.clone(),
            (Reputation::Reason(_), _) | (Reputation::Rate(_), None) => return Ok(None),
            (Reputation::Rate(_), Some(level)) => level.as_str().to_string(),
        };

        self.flags.set(&OrderFlag::new(&order.id, value)).await?;
        info!(order_id = %order.id, ?level, "Order flagged");

        Ok(level)
    }

    /// Reports the delivery outcome of an order.
    ///
    /// # Errors
    ///
    /// Returns an error if the billing email or order ID is empty.
    pub async fn report_outcome(
        &self,
        order: &Order,
        outcome: Outcome,
    ) -> Result<Option<serde_json::Value>> {
        let ack = self.client.report_outcome(&order.signal(outcome)).await?;
        info!(
            order_id = %order.id,
            outcome = outcome.value(),
            acknowledged = ack.is_some(),
            "Outcome reported"
        );
        Ok(ack)
    }

    /// Returns the display form of an order's stored flag.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn flag_display(&self, order_id: &str) -> Result<Option<FlagDisplay>> {
        Ok(self
            .flags
            .get(order_id)
            .await?
            .map(|flag| flag.display(&self.classifier)))
    }

    /// Checkout screening: true if the buyer's score is below the threshold.
    ///
    /// Fails open when the service does not answer.
    ///
    /// # Errors
    ///
    /// Returns an error if the email is empty.
    pub async fn is_email_flagged(&self, email: &str) -> Result<bool> {
        let flagged = self
            .client
            .check_reputation(email, self.threshold)
            .await?
            .is_some_and(|reputation| reputation.is_below(self.threshold));

        debug!(flagged, "Checkout screening");
        Ok(flagged)
    }
}
