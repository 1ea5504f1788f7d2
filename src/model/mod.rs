//! Data models for the car registry.
//!
//! - [`Car`]: a stored car record
//! - [`CarInput`]: partial fields for creating or patching a car

mod car;

pub use car::{Car, CarInput};
