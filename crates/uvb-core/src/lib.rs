//! # uvb-core
//!
//! Order flagging and outcome reporting for shops using the Utánvét Ellenőr
//! reputation service.
//!
//! This crate provides:
//! - Connector settings (JSON file, system keyring for the private key)
//! - Per-order flag storage (`SQLite`)
//! - Order lifecycle handling: flag on creation, report on completion or
//!   refusal
//! - Checkout screening of buyer emails

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod credentials;
mod error;
pub mod flag;
pub mod service;
pub mod settings;

pub use credentials::{CredentialError, CredentialResult};
pub use error::{Error, Result};
pub use flag::{FlagDisplay, FlagRepository, OrderFlag};
pub use service::{EventResult, Order, OrderEvent, OrderService, ShippingAddress};
pub use settings::Settings;
