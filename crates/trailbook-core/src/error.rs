//! Error types for Trailbook Core

use crate::limits::ValidationError;
use crate::trip::TripId;
use thiserror::Error;

/// Result type alias using Trailbook's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Trailbook error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Trip not found: {0}")]
    TripNotFound(TripId),

    #[error("Trip log is full: {max} trips")]
    CapacityExceeded { max: usize },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// The underlying validation failure, if this is one
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(e) => Some(e),
            _ => None,
        }
    }
}
