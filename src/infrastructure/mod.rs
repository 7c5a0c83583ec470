//! Infrastructure module.
//!
//! This module contains the in-memory task store and its configuration.

pub mod config;
#[cfg(feature = "sync")]
pub mod shared;
pub mod store;

pub use config::{ConfigurationError, DuplicatePolicy, StoreConfig, StoreConfigBuilder};
#[cfg(feature = "sync")]
pub use shared::SharedTaskStore;
pub use store::{StoreError, TaskStore};
