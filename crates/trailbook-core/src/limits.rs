//! Field constraints for parks, visitors and trip dates

use crate::date::{DateField, TripDate};
use crate::park::ParkId;
use crate::visitor::VisitorId;

/// Minimum length for park names (3 chars)
pub const MIN_PARK_NAME_LEN: usize = 3;

/// Minimum length for visitor names (1 char)
pub const MIN_VISITOR_NAME_LEN: usize = 1;

/// Maximum length for visitor names (15 chars)
pub const MAX_VISITOR_NAME_LEN: usize = 15;

/// Minimum length for a trip date token (7 chars)
pub const MIN_TRIP_DATE_LEN: usize = 7;

/// Format hint shown when a trip date is rejected
pub const TRIP_DATE_EXAMPLE: &str = "September 1st";

/// Validation error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    ParkNameTooShort { len: usize, min: usize },
    ParkNameImmutable,
    VisitorNameLength { len: usize, min: usize, max: usize },
    InvalidTripDate { field: DateField, value: String },
    UnknownVisitor(VisitorId),
    UnknownPark(ParkId),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ParkNameTooShort { len, min } => {
                write!(f, "park name must be at least {} characters (got {})", min, len)
            }
            Self::ParkNameImmutable => write!(f, "park name cannot be changed"),
            Self::VisitorNameLength { len, min, max } => write!(
                f,
                "visitor name must be between {} and {} characters (got {})",
                min, max, len
            ),
            Self::InvalidTripDate { field, value } => write!(
                f,
                "{} must be at least {} characters in the format \"{}\" (got {:?})",
                field, MIN_TRIP_DATE_LEN, TRIP_DATE_EXAMPLE, value
            ),
            Self::UnknownVisitor(id) => write!(f, "visitor {} is not registered", id),
            Self::UnknownPark(id) => write!(f, "park {} is not registered", id),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate park name
pub fn validate_park_name(name: &str) -> Result<(), ValidationError> {
    let len = name.chars().count();
    if len < MIN_PARK_NAME_LEN {
        return Err(ValidationError::ParkNameTooShort {
            len,
            min: MIN_PARK_NAME_LEN,
        });
    }
    Ok(())
}

/// Validate visitor name
pub fn validate_visitor_name(name: &str) -> Result<(), ValidationError> {
    let len = name.chars().count();
    if !(MIN_VISITOR_NAME_LEN..=MAX_VISITOR_NAME_LEN).contains(&len) {
        return Err(ValidationError::VisitorNameLength {
            len,
            min: MIN_VISITOR_NAME_LEN,
            max: MAX_VISITOR_NAME_LEN,
        });
    }
    Ok(())
}

/// Validate a trip date token for the given field
pub fn validate_trip_date(field: DateField, value: &str) -> Result<TripDate, ValidationError> {
    TripDate::parse(value).ok_or_else(|| ValidationError::InvalidTripDate {
        field,
        value: value.to_string(),
    })
}
