//! Trip registry trait definition

use crate::error::Result;
use crate::park::{Park, ParkId};
use crate::snapshot::RegistrySnapshot;
use crate::trip::{NewTrip, Trip, TripId};
use crate::visitor::{Visitor, VisitorId};

/// Owner of the parks, visitors and trip log.
///
/// Backends implement the record-keeping methods; every aggregate query is
/// a provided method computed from a fresh [`RegistrySnapshot`], so results
/// always reflect the registry as it is at the moment of the call.
pub trait TripRegistry: Send + Sync {
    // ─────────────────────────────────────────────────────────────────────────
    // Park and Visitor Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Save a park so trips can reference it
    fn save_park(&self, park: &Park) -> Result<()>;

    /// Save a visitor so trips can reference it.
    ///
    /// Saving one that is already registered leaves the stored entry as is;
    /// use [`rename_visitor`](Self::rename_visitor) to change it.
    fn save_visitor(&self, visitor: &Visitor) -> Result<()>;

    /// Validate `name` and write it to the stored visitor
    fn rename_visitor(&self, id: &VisitorId, name: String) -> Result<Visitor>;

    /// Get a park by ID
    fn get_park(&self, id: &ParkId) -> Result<Option<Park>>;

    /// Get a visitor by ID
    fn get_visitor(&self, id: &VisitorId) -> Result<Option<Visitor>>;

    // ─────────────────────────────────────────────────────────────────────────
    // Trip Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Validate and append a trip to the log.
    ///
    /// Checks the visitor, then the park, then the start date, then the end
    /// date, and stops at the first failure. Nothing is recorded unless all
    /// four pass.
    fn create_trip(&self, new: NewTrip) -> Result<Trip>;

    /// Point a recorded trip at another registered visitor
    fn set_trip_visitor(&self, id: &TripId, visitor: &Visitor) -> Result<Trip>;

    /// Point a recorded trip at another registered park
    fn set_trip_park(&self, id: &TripId, park: &Park) -> Result<Trip>;

    /// Validate and replace a recorded trip's start date
    fn set_trip_start_date(&self, id: &TripId, start_date: &str) -> Result<Trip>;

    /// Validate and replace a recorded trip's end date
    fn set_trip_end_date(&self, id: &TripId, end_date: &str) -> Result<Trip>;

    /// Get a trip by ID
    fn get_trip(&self, id: &TripId) -> Result<Option<Trip>>;

    /// All trips in creation order
    fn all_trips(&self) -> Result<Vec<Trip>>;

    /// Copy out everything in one consistent read
    fn snapshot(&self) -> Result<RegistrySnapshot>;

    /// Forget every park, visitor and trip
    fn clear(&self) -> Result<()>;

    // ─────────────────────────────────────────────────────────────────────────
    // Aggregate Queries
    // ─────────────────────────────────────────────────────────────────────────

    fn park_trips(&self, park: &Park) -> Result<Vec<Trip>> {
        Ok(self.snapshot()?.park_trips(park))
    }

    fn park_visitors(&self, park: &Park) -> Result<Vec<Visitor>> {
        Ok(self.snapshot()?.park_visitors(park))
    }

    fn park_total_visits(&self, park: &Park) -> Result<usize> {
        Ok(self.snapshot()?.park_total_visits(park))
    }

    fn best_visitor(&self, park: &Park) -> Result<Option<Visitor>> {
        Ok(self.snapshot()?.best_visitor(park))
    }

    fn most_visited_park(&self) -> Result<Option<Park>> {
        Ok(self.snapshot()?.most_visited_park())
    }

    fn visitor_trips(&self, visitor: &Visitor) -> Result<Vec<Trip>> {
        Ok(self.snapshot()?.visitor_trips(visitor))
    }

    fn visitor_parks(&self, visitor: &Visitor) -> Result<Vec<Park>> {
        Ok(self.snapshot()?.visitor_parks(visitor))
    }

    fn total_visits_at_park(&self, visitor: &Visitor, park: &Park) -> Result<usize> {
        Ok(self.snapshot()?.total_visits_at_park(visitor, park))
    }
}
