//! Point-in-time view of a registry and the aggregate queries over it

use crate::error::Result;
use crate::park::{Park, ParkId};
use crate::trip::Trip;
use crate::visitor::{Visitor, VisitorId};
use serde::Serialize;
use std::collections::HashMap;
use std::hash::Hash;

/// Every park, visitor and trip known to a registry at one moment.
///
/// Aggregates are full scans over `trips`. Where a query returns a set
/// (distinct visitors, distinct parks) the members come back in order of
/// their first trip, and ties in `best_visitor` / `most_visited_park` go
/// to whichever candidate appeared first.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RegistrySnapshot {
    pub parks: Vec<Park>,
    pub visitors: Vec<Visitor>,
    /// Trips in creation order
    pub trips: Vec<Trip>,
}

impl RegistrySnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parks(mut self, parks: Vec<Park>) -> Self {
        self.parks = parks;
        self
    }

    pub fn with_visitors(mut self, visitors: Vec<Visitor>) -> Self {
        self.visitors = visitors;
        self
    }

    pub fn with_trips(mut self, trips: Vec<Trip>) -> Self {
        self.trips = trips;
        self
    }

    pub fn find_park(&self, id: &ParkId) -> Option<&Park> {
        self.parks.iter().find(|p| p.id() == id)
    }

    pub fn find_visitor(&self, id: &VisitorId) -> Option<&Visitor> {
        self.visitors.iter().find(|v| v.id() == id)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Park aggregates
    // ─────────────────────────────────────────────────────────────────────────

    pub fn park_trips(&self, park: &Park) -> Vec<Trip> {
        self.trips.iter().filter(|t| t.is_to(park)).cloned().collect()
    }

    pub fn park_visitors(&self, park: &Park) -> Vec<Visitor> {
        tally(self.trips_to(park).map(|t| *t.visitor_id()))
            .into_iter()
            .filter_map(|(id, _)| self.find_visitor(&id).cloned())
            .collect()
    }

    pub fn park_total_visits(&self, park: &Park) -> usize {
        self.trips_to(park).count()
    }

    /// The visitor with strictly the most trips to `park`
    pub fn best_visitor(&self, park: &Park) -> Option<Visitor> {
        let counts = tally(self.trips_to(park).map(|t| *t.visitor_id()));
        first_strict_max(counts).and_then(|id| self.find_visitor(&id).cloned())
    }

    /// The park with strictly the most trips, among parks that have any
    pub fn most_visited_park(&self) -> Option<Park> {
        let counts = tally(self.trips.iter().map(|t| *t.park_id()));
        first_strict_max(counts).and_then(|id| self.find_park(&id).cloned())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Visitor aggregates
    // ─────────────────────────────────────────────────────────────────────────

    pub fn visitor_trips(&self, visitor: &Visitor) -> Vec<Trip> {
        self.trips.iter().filter(|t| t.is_by(visitor)).cloned().collect()
    }

    pub fn visitor_parks(&self, visitor: &Visitor) -> Vec<Park> {
        tally(self.trips_by(visitor).map(|t| *t.park_id()))
            .into_iter()
            .filter_map(|(id, _)| self.find_park(&id).cloned())
            .collect()
    }

    pub fn total_visits_at_park(&self, visitor: &Visitor, park: &Park) -> usize {
        self.trips_by(visitor).filter(|t| t.is_to(park)).count()
    }

    /// Serialize the snapshot as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn trips_to<'a>(&'a self, park: &'a Park) -> impl Iterator<Item = &'a Trip> + 'a {
        self.trips.iter().filter(move |t| t.is_to(park))
    }

    fn trips_by<'a>(&'a self, visitor: &'a Visitor) -> impl Iterator<Item = &'a Trip> + 'a {
        self.trips.iter().filter(move |t| t.is_by(visitor))
    }
}

/// Count occurrences, keeping keys in order of first appearance
fn tally<K: Copy + Eq + Hash>(keys: impl IntoIterator<Item = K>) -> Vec<(K, usize)> {
    let mut counts: Vec<(K, usize)> = Vec::new();
    let mut index: HashMap<K, usize> = HashMap::new();
    for key in keys {
        match index.get(&key) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(key, counts.len());
                counts.push((key, 1));
            }
        }
    }
    counts
}

/// First key whose count beats every earlier one; None if all counts are 0
fn first_strict_max<K>(counts: impl IntoIterator<Item = (K, usize)>) -> Option<K> {
    let mut best: Option<(K, usize)> = None;
    for (key, count) in counts {
        let to_beat = best.as_ref().map_or(0, |(_, c)| *c);
        if count > to_beat {
            best = Some((key, count));
        }
    }
    best.map(|(key, _)| key)
}
