//! Per-order flag storage.
//!
//! A flag is the raw value computed when an order is created: either a
//! service reason message or a level identifier (`warning`, `error`).

mod model;
mod repository;

pub use model::{FlagDisplay, OrderFlag};
pub use repository::FlagRepository;
