//! Domain layer: business entities and the persistence contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`store`] - Storage trait implemented by the infrastructure layer
//!
//! The domain layer has no dependency on infrastructure concerns; concrete
//! stores live in [`crate::infrastructure::persistence`] and business logic
//! in [`crate::application::services`].

pub mod entities;
pub mod store;

pub use store::{LinkMap, Store};

#[cfg(test)]
pub use store::MockStore;
