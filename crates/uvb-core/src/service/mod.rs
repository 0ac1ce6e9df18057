//! Order lifecycle services.
//!
//! This module bridges shop order events with the reputation client and
//! the flag repository.

mod lifecycle;
mod order;

pub use lifecycle::{EventResult, OrderService};
pub use order::{Order, OrderEvent, ShippingAddress};
