//! Trailbook Storage - Registry backends
//!
//! This crate provides implementations of [`TripRegistry`] that own the
//! parks, visitors and trip log.

pub mod config;
pub mod error;
pub mod memory;

pub use config::StoreConfig;
pub use error::{StorageError, StorageResult};
pub use memory::MemoryRegistry;
pub use trailbook_core::TripRegistry;
