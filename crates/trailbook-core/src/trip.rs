//! Trip (join record) types

use crate::date::{DateField, TripDate};
use crate::error::Result;
use crate::limits::validate_trip_date;
use crate::park::{Park, ParkId};
use crate::registry::TripRegistry;
use crate::visitor::{Visitor, VisitorId};
use chrono::{DateTime, Utc};
use serde::Serialize;
use ulid::Ulid;

/// Unique identifier for a trip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TripId(pub Ulid);

impl TripId {
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for TripId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TripId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A visit by one visitor to one park between two dates
#[derive(Debug, Clone, Serialize)]
pub struct Trip {
    /// Unique identifier
    id: TripId,

    /// Who made the trip
    visitor: VisitorId,

    /// Where they went
    park: ParkId,

    start_date: TripDate,

    end_date: TripDate,

    /// Creation timestamp
    created_at: DateTime<Utc>,
}

impl Trip {
    /// Build a trip with validated dates.
    ///
    /// The trip is not recorded anywhere; use
    /// [`TripRegistry::create_trip`](crate::TripRegistry::create_trip) for that.
    pub fn new(visitor: &Visitor, park: &Park, start_date: &str, end_date: &str) -> Result<Self> {
        Self::build(*visitor.id(), *park.id(), start_date, end_date)
    }

    /// Build a trip from a creation request
    pub fn from_new(new: &NewTrip) -> Result<Self> {
        Self::build(new.visitor, new.park, &new.start_date, &new.end_date)
    }

    fn build(visitor: VisitorId, park: ParkId, start_date: &str, end_date: &str) -> Result<Self> {
        let start_date = validate_trip_date(DateField::Start, start_date)?;
        let end_date = validate_trip_date(DateField::End, end_date)?;
        Ok(Self {
            id: TripId::new(),
            visitor,
            park,
            start_date,
            end_date,
            created_at: Utc::now(),
        })
    }

    pub fn id(&self) -> &TripId {
        &self.id
    }

    pub fn visitor_id(&self) -> &VisitorId {
        &self.visitor
    }

    pub fn park_id(&self) -> &ParkId {
        &self.park
    }

    pub fn start_date(&self) -> &TripDate {
        &self.start_date
    }

    pub fn end_date(&self) -> &TripDate {
        &self.end_date
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Whether this trip was made by `visitor`
    pub fn is_by(&self, visitor: &Visitor) -> bool {
        self.visitor == *visitor.id()
    }

    /// Whether this trip went to `park`
    pub fn is_to(&self, park: &Park) -> bool {
        self.park == *park.id()
    }

    /// Point this recorded trip at another visitor.
    ///
    /// The change is written to `registry` first, so every aggregate sees
    /// it immediately; this copy is then refreshed from the stored trip.
    pub fn set_visitor<R: TripRegistry + ?Sized>(
        &mut self,
        registry: &R,
        visitor: &Visitor,
    ) -> Result<()> {
        *self = registry.set_trip_visitor(&self.id, visitor)?;
        Ok(())
    }

    /// Point this recorded trip at another park, through `registry`.
    pub fn set_park<R: TripRegistry + ?Sized>(&mut self, registry: &R, park: &Park) -> Result<()> {
        *self = registry.set_trip_park(&self.id, park)?;
        Ok(())
    }

    /// Replace the start date, through `registry`. On failure nothing changes.
    pub fn set_start_date<R: TripRegistry + ?Sized>(
        &mut self,
        registry: &R,
        start_date: &str,
    ) -> Result<()> {
        *self = registry.set_trip_start_date(&self.id, start_date)?;
        Ok(())
    }

    /// Replace the end date, through `registry`. On failure nothing changes.
    pub fn set_end_date<R: TripRegistry + ?Sized>(
        &mut self,
        registry: &R,
        end_date: &str,
    ) -> Result<()> {
        *self = registry.set_trip_end_date(&self.id, end_date)?;
        Ok(())
    }

    pub(crate) fn assign_visitor(&mut self, visitor: &VisitorId) {
        self.visitor = *visitor;
    }

    pub(crate) fn assign_park(&mut self, park: &ParkId) {
        self.park = *park;
    }

    pub(crate) fn assign_date(&mut self, field: DateField, value: &str) -> Result<()> {
        let date = validate_trip_date(field, value)?;
        match field {
            DateField::Start => self.start_date = date,
            DateField::End => self.end_date = date,
        }
        Ok(())
    }
}

impl PartialEq for Trip {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Trip {}

/// Data for creating a new trip
#[derive(Debug, Clone, Serialize)]
pub struct NewTrip {
    pub visitor: VisitorId,
    pub park: ParkId,
    pub start_date: String,
    pub end_date: String,
}

impl NewTrip {
    pub fn new(
        visitor: &Visitor,
        park: &Park,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Self {
        Self {
            visitor: *visitor.id(),
            park: *park.id(),
            start_date: start_date.into(),
            end_date: end_date.into(),
        }
    }
}
