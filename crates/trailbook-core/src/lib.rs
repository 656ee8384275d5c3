//! Trailbook Core - Parks, visitors and the trips that join them
//!
//! This crate provides the domain types, validation rules and the
//! registry trait whose provided methods answer every aggregate query.

pub mod date;
pub mod error;
pub mod ledger;
pub mod limits;
pub mod park;
pub mod registry;
pub mod snapshot;
pub mod trip;
pub mod visitor;

pub use date::{DateField, TripDate};
pub use error::{Error, Result};
pub use ledger::Ledger;
pub use limits::ValidationError;
pub use park::{Park, ParkId};
pub use registry::TripRegistry;
pub use snapshot::RegistrySnapshot;
pub use trip::{NewTrip, Trip, TripId};
pub use visitor::{Visitor, VisitorId};
