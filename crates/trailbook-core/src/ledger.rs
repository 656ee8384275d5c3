//! Mutable record of parks, visitors and trips

use crate::date::DateField;
use crate::error::{Error, Result};
use crate::limits::ValidationError;
use crate::park::{Park, ParkId};
use crate::snapshot::RegistrySnapshot;
use crate::trip::{NewTrip, Trip, TripId};
use crate::visitor::{Visitor, VisitorId};

/// The state behind a registry.
///
/// Every change is validated and written in place, so the next query sees
/// it without any write-back step. Backends wrap a `Ledger` in whatever
/// synchronization they need.
#[derive(Debug, Default)]
pub struct Ledger {
    parks: Vec<Park>,
    visitors: Vec<Visitor>,
    trips: Vec<Trip>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ledger with room for `trips` trips
    pub fn with_capacity(trips: usize) -> Self {
        Self {
            trips: Vec::with_capacity(trips),
            ..Default::default()
        }
    }

    pub fn park(&self, id: &ParkId) -> Option<&Park> {
        self.parks.iter().find(|p| p.id() == id)
    }

    pub fn visitor(&self, id: &VisitorId) -> Option<&Visitor> {
        self.visitors.iter().find(|v| v.id() == id)
    }

    pub fn trip(&self, id: &TripId) -> Option<&Trip> {
        self.trips.iter().find(|t| t.id() == id)
    }

    /// Trips in creation order
    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    /// Add a park; returns false if it was already present
    pub fn save_park(&mut self, park: &Park) -> bool {
        if self.park(park.id()).is_some() {
            return false;
        }
        self.parks.push(park.clone());
        true
    }

    /// Add a visitor; returns false if it was already present.
    ///
    /// An existing entry is left alone, so a stale copy cannot undo a rename.
    pub fn save_visitor(&mut self, visitor: &Visitor) -> bool {
        if self.visitor(visitor.id()).is_some() {
            return false;
        }
        self.visitors.push(visitor.clone());
        true
    }

    pub fn rename_visitor(&mut self, id: &VisitorId, name: String) -> Result<Visitor> {
        let visitor = self
            .visitors
            .iter_mut()
            .find(|v| v.id() == id)
            .ok_or(ValidationError::UnknownVisitor(*id))?;
        visitor.assign_name(name)?;
        Ok(visitor.clone())
    }

    /// Validate and append a trip.
    ///
    /// Order: visitor registered, park registered, start date, end date,
    /// then the `max_trips` cap. Nothing is appended on failure.
    pub fn create_trip(&mut self, new: &NewTrip, max_trips: Option<usize>) -> Result<Trip> {
        self.check_visitor(&new.visitor)?;
        self.check_park(&new.park)?;
        let trip = Trip::from_new(new)?;

        if let Some(max) = max_trips {
            if self.trips.len() >= max {
                return Err(Error::CapacityExceeded { max });
            }
        }

        self.trips.push(trip.clone());
        Ok(trip)
    }

    pub fn set_trip_visitor(&mut self, id: &TripId, visitor: &Visitor) -> Result<Trip> {
        self.check_visitor(visitor.id())?;
        let trip = self.trip_mut(id)?;
        trip.assign_visitor(visitor.id());
        Ok(trip.clone())
    }

    pub fn set_trip_park(&mut self, id: &TripId, park: &Park) -> Result<Trip> {
        self.check_park(park.id())?;
        let trip = self.trip_mut(id)?;
        trip.assign_park(park.id());
        Ok(trip.clone())
    }

    pub fn set_trip_date(&mut self, id: &TripId, field: DateField, value: &str) -> Result<Trip> {
        let trip = self.trip_mut(id)?;
        trip.assign_date(field, value)?;
        Ok(trip.clone())
    }

    /// Copy out the current state
    pub fn snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot::new()
            .with_parks(self.parks.clone())
            .with_visitors(self.visitors.clone())
            .with_trips(self.trips.clone())
    }

    fn check_visitor(&self, id: &VisitorId) -> Result<()> {
        match self.visitor(id) {
            Some(_) => Ok(()),
            None => Err(ValidationError::UnknownVisitor(*id).into()),
        }
    }

    fn check_park(&self, id: &ParkId) -> Result<()> {
        match self.park(id) {
            Some(_) => Ok(()),
            None => Err(ValidationError::UnknownPark(*id).into()),
        }
    }

    fn trip_mut(&mut self, id: &TripId) -> Result<&mut Trip> {
        self.trips
            .iter_mut()
            .find(|t| t.id() == id)
            .ok_or(Error::TripNotFound(*id))
    }
}
