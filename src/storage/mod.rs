//! In-memory storage for cars.
//!
//! The registry lives only as long as the process. It is seeded with four
//! demo cars unless configured otherwise.
//!
//! ## Components
//!
//! - [`CarRegistry`]: ordered list of cars with list/get/search/add/update/delete
//! - [`SharedRegistry`]: the registry behind an async read-write lock

mod registry;

pub use registry::{CarRegistry, SharedRegistry};
