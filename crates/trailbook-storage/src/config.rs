//! Registry configuration

use crate::error::StorageResult;
use serde::Deserialize;

/// Settings for [`MemoryRegistry`](crate::MemoryRegistry).
///
/// Every key is optional:
///
/// ```toml
/// max_trips = 10000
/// initial_capacity = 256
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Cap on the trip log; `None` means unbounded
    pub max_trips: Option<usize>,

    /// Trips to pre-allocate room for
    pub initial_capacity: usize,
}

impl StoreConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text
    pub fn from_toml_str(s: &str) -> StorageResult<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn with_max_trips(mut self, max: usize) -> Self {
        self.max_trips = Some(max);
        self
    }

    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }
}
