//! Reputation service client.

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::{ClientConfig, Credentials, Environment};
use crate::error::Result;
use crate::payload::{ReputationRequest, Signal};
use crate::response::{Reputation, ResponseSchema};
use crate::transport::{HttpTransport, Transport};

/// Endpoint of reputation checks.
const REQUEST_ENDPOINT: &str = "/request";

/// Endpoint of outcome reports.
const SIGNAL_ENDPOINT: &str = "/signal";

/// Client for the reputation service.
///
/// Holds configuration only; every call is an independent request.
/// Argument errors are returned as [`crate::Error::InvalidArgument`] before any
/// network activity. Transport failures and unexpected bodies are logged
/// and reported as `Ok(None)`, so an outage never blocks the caller.
#[derive(Debug, Clone)]
pub struct ReputationClient<T = HttpTransport> {
    credentials: Credentials,
    config: ClientConfig,
    transport: T,
}

impl ReputationClient<HttpTransport> {
    /// Creates a production client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Creates a client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(credentials, config, transport))
    }
}

impl<T: Transport> ReputationClient<T> {
    /// Creates a client on top of a custom transport.
    #[must_use]
    pub const fn with_transport(credentials: Credentials, config: ClientConfig, transport: T) -> Self {
        Self {
            credentials,
            config,
            transport,
        }
    }

    /// Selects the sandbox or production environment.
    #[must_use]
    pub fn with_sandbox(mut self, sandbox: bool) -> Self {
        self.set_sandbox(sandbox);
        self
    }

    /// Switches between the sandbox and production environment.
    pub fn set_sandbox(&mut self, sandbox: bool) {
        self.config.environment = Environment::from_sandbox(sandbox);
    }

    /// Returns true if the client targets the sandbox.
    #[must_use]
    pub fn is_sandbox(&self) -> bool {
        self.config.environment == Environment::Sandbox
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the response schema this client decodes.
    #[must_use]
    pub const fn schema(&self) -> ResponseSchema {
        self.config.schema
    }

    /// Checks the reputation of a buyer.
    ///
    /// Returns `Ok(None)` if the service could not be reached or answered
    /// with something other than the configured schema.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidArgument`] if the email is empty or the
    /// threshold is outside `[-1, 1]`.
    pub async fn check_reputation(&self, email: &str, threshold: f64) -> Result<Option<Reputation>> {
        let request = ReputationRequest::new(email, threshold);
        request.validate()?;

        let Some(body) = self.execute(REQUEST_ENDPOINT, &request).await? else {
            return Ok(None);
        };

        match Reputation::decode(self.config.schema, &body) {
            Ok(reputation) => {
                debug!(score = reputation.score(), "Reputation received");
                Ok(Some(reputation))
            }
            Err(e) => {
                warn!(?e, schema = ?self.config.schema, "Unexpected reputation response");
                Ok(None)
            }
        }
    }

    /// Reports the delivery outcome of an order.
    ///
    /// Returns the service acknowledgment, or `Ok(None)` if the service could
    /// not be reached or did not answer with JSON.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidArgument`] if the email or order ID is empty.
    pub async fn report_outcome(&self, signal: &Signal) -> Result<Option<serde_json::Value>> {
        signal.validate()?;

        let Some(body) = self.execute(SIGNAL_ENDPOINT, signal).await? else {
            return Ok(None);
        };

        match serde_json::from_slice(&body) {
            Ok(ack) => {
                debug!(order_id = %signal.order_id, "Signal acknowledged");
                Ok(Some(ack))
            }
            Err(e) => {
                warn!(?e, order_id = %signal.order_id, "Unexpected signal response");
                Ok(None)
            }
        }
    }

    /// Posts `payload` to `endpoint`, mapping transport errors to `None`.
    async fn execute<P: Serialize>(&self, endpoint: &str, payload: &P) -> Result<Option<Vec<u8>>> {
        let url = self.config.environment.endpoint(endpoint)?;
        let body = serde_json::to_vec(payload)?;

        debug!(%url, "Sending request");

        match self
            .transport
            .post_json(url, self.credentials.authorization(), body)
            .await
        {
            Ok(body) => Ok(Some(body)),
            Err(e) if e.is_transport() => {
                warn!(?e, endpoint, "Reputation service unavailable");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}
