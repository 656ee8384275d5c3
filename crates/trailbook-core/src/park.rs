//! Park types and per-park aggregates

use crate::error::Result;
use crate::limits::{validate_park_name, ValidationError};
use crate::registry::TripRegistry;
use crate::trip::Trip;
use crate::visitor::Visitor;
use serde::Serialize;
use std::hash::{Hash, Hasher};
use ulid::Ulid;

/// Unique identifier for a park
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ParkId(pub Ulid);

impl ParkId {
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for ParkId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ParkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named park.
///
/// Two parks are equal only if they are the same park: a second
/// `Park::new("Yellowstone")` is a different park with its own id. The
/// name is fixed at construction.
#[derive(Debug, Clone, Serialize)]
pub struct Park {
    id: ParkId,
    name: String,
}

impl Park {
    /// Create a park; the name must be at least 3 characters
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_park_name(&name)?;
        Ok(Self {
            id: ParkId::new(),
            name,
        })
    }

    pub fn id(&self) -> &ParkId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Park names are write-once; this always fails, even for the same name.
    pub fn set_name(&mut self, _name: impl Into<String>) -> Result<()> {
        Err(ValidationError::ParkNameImmutable.into())
    }

    /// Trips to this park, in creation order
    pub fn trips<R: TripRegistry + ?Sized>(&self, registry: &R) -> Result<Vec<Trip>> {
        registry.park_trips(self)
    }

    /// Distinct visitors of this park
    pub fn visitors<R: TripRegistry + ?Sized>(&self, registry: &R) -> Result<Vec<Visitor>> {
        registry.park_visitors(self)
    }

    /// Number of trips to this park (not distinct visitors)
    pub fn total_visits<R: TripRegistry + ?Sized>(&self, registry: &R) -> Result<usize> {
        registry.park_total_visits(self)
    }

    /// The visitor with the most trips here
    pub fn best_visitor<R: TripRegistry + ?Sized>(&self, registry: &R) -> Result<Option<Visitor>> {
        registry.best_visitor(self)
    }

    /// The park with the most trips across the whole registry
    pub fn most_visited<R: TripRegistry + ?Sized>(registry: &R) -> Result<Option<Park>> {
        registry.most_visited_park()
    }
}

impl PartialEq for Park {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Park {}

impl Hash for Park {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
