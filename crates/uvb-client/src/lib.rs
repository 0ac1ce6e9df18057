//! # uvb-client
//!
//! Client library for the Utánvét Ellenőr buyer reputation service.
//!
//! ## Features
//!
//! - **Reputation checks**: `POST /request` keyed on buyer email and a
//!   merchant threshold
//! - **Outcome signals**: `POST /signal` reporting whether a cash-on-delivery
//!   order was accepted or refused
//! - **Classification**: reason-table and rate-band schemes mapping results
//!   to flag levels
//! - **Fail-open transport**: outages and malformed answers yield `None`,
//!   never an error
//!
//! ## Quick Start
//!
//! ```ignore
//! use uvb_client::{Classifier, Credentials, ReputationClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ReputationClient::new(Credentials::new("public", "private"))?
//!         .with_sandbox(true);
//!
//!     let threshold = 0.5;
//!     if let Some(reputation) = client.check_reputation("buyer@example.com", threshold).await? {
//!         let level = Classifier::new().classify(&reputation.assessment(threshold));
//!         println!("Flag: {level:?}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ### Reporting an outcome
//!
//! ```ignore
//! use uvb_client::{Outcome, Signal};
//!
//! let signal = Signal::new("buyer@example.com", Outcome::Refused, "1042")
//!     .with_country_code("HU")
//!     .with_postal_code("1111");
//! client.report_outcome(&signal).await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod classify;
mod client;
mod config;
mod error;
mod payload;
mod response;
mod transport;

#[cfg(test)]
mod proptests;

pub use classify::{Assessment, Classifier, FlagLevel, ReasonTable, WarningBand, label_for};
pub use client::ReputationClient;
pub use config::{
    ClientConfig, Credentials, DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT, Environment,
    PRODUCTION_BASE_URL, SANDBOX_BASE_URL,
};
pub use error::{Error, InvalidArgument, Result};
pub use payload::{Outcome, ReputationRequest, Signal};
pub use response::{RateResult, ReasonResult, Reputation, ResponseSchema};
pub use transport::{HttpTransport, Transport};
