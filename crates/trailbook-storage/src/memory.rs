//! In-memory registry backend

use crate::config::StoreConfig;
use crate::error::{StorageError, StorageResult};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use trailbook_core::{
    DateField, Ledger, NewTrip, Park, ParkId, RegistrySnapshot, Result, Trip, TripId,
    TripRegistry, Visitor, VisitorId,
};

/// In-memory trip registry
///
/// All state sits behind one lock, so a trip is checked and appended
/// atomically, every mutation lands in the stored record itself, and every
/// query reads a consistent view.
pub struct MemoryRegistry {
    ledger: RwLock<Ledger>,
    config: StoreConfig,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            ledger: RwLock::new(Ledger::with_capacity(config.initial_capacity)),
            config,
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn read(&self) -> StorageResult<RwLockReadGuard<'_, Ledger>> {
        self.ledger
            .read()
            .map_err(|e| StorageError::Lock(e.to_string()))
    }

    fn write(&self) -> StorageResult<RwLockWriteGuard<'_, Ledger>> {
        self.ledger
            .write()
            .map_err(|e| StorageError::Lock(e.to_string()))
    }

    fn set_trip_date(&self, id: &TripId, field: DateField, value: &str) -> Result<Trip> {
        let trip = self.write()?.set_trip_date(id, field, value)?;
        tracing::debug!(trip = %id, %field, value, "Updated trip date");
        Ok(trip)
    }
}

impl Default for MemoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TripRegistry for MemoryRegistry {
    // Park and visitor operations

    fn save_park(&self, park: &Park) -> Result<()> {
        if self.write()?.save_park(park) {
            tracing::debug!(park = %park.id(), name = park.name(), "Saved park");
        }
        Ok(())
    }

    fn save_visitor(&self, visitor: &Visitor) -> Result<()> {
        if self.write()?.save_visitor(visitor) {
            tracing::debug!(visitor = %visitor.id(), name = visitor.name(), "Saved visitor");
        }
        Ok(())
    }

    fn rename_visitor(&self, id: &VisitorId, name: String) -> Result<Visitor> {
        let visitor = self.write()?.rename_visitor(id, name)?;
        tracing::debug!(visitor = %id, name = visitor.name(), "Renamed visitor");
        Ok(visitor)
    }

    fn get_park(&self, id: &ParkId) -> Result<Option<Park>> {
        Ok(self.read()?.park(id).cloned())
    }

    fn get_visitor(&self, id: &VisitorId) -> Result<Option<Visitor>> {
        Ok(self.read()?.visitor(id).cloned())
    }

    // Trip operations

    fn create_trip(&self, new: NewTrip) -> Result<Trip> {
        let mut ledger = self.write()?;
        let trip = ledger.create_trip(&new, self.config.max_trips)?;
        tracing::debug!(
            trip = %trip.id(),
            visitor = %new.visitor,
            park = %new.park,
            total = ledger.trips().len(),
            "Recorded trip"
        );
        Ok(trip)
    }

    fn set_trip_visitor(&self, id: &TripId, visitor: &Visitor) -> Result<Trip> {
        let trip = self.write()?.set_trip_visitor(id, visitor)?;
        tracing::debug!(trip = %id, visitor = %visitor.id(), "Moved trip to visitor");
        Ok(trip)
    }

    fn set_trip_park(&self, id: &TripId, park: &Park) -> Result<Trip> {
        let trip = self.write()?.set_trip_park(id, park)?;
        tracing::debug!(trip = %id, park = %park.id(), "Moved trip to park");
        Ok(trip)
    }

    fn set_trip_start_date(&self, id: &TripId, start_date: &str) -> Result<Trip> {
        self.set_trip_date(id, DateField::Start, start_date)
    }

    fn set_trip_end_date(&self, id: &TripId, end_date: &str) -> Result<Trip> {
        self.set_trip_date(id, DateField::End, end_date)
    }

    fn get_trip(&self, id: &TripId) -> Result<Option<Trip>> {
        Ok(self.read()?.trip(id).cloned())
    }

    fn all_trips(&self) -> Result<Vec<Trip>> {
        Ok(self.read()?.trips().to_vec())
    }

    fn snapshot(&self) -> Result<RegistrySnapshot> {
        Ok(self.read()?.snapshot())
    }

    fn clear(&self) -> Result<()> {
        let mut ledger = self.write()?;
        let trips = ledger.trips().len();
        *ledger = Ledger::with_capacity(self.config.initial_capacity);
        tracing::debug!(trips, "Cleared registry");
        Ok(())
    }
}
