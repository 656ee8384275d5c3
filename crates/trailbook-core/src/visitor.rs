//! Visitor types and per-visitor aggregates

use crate::error::Result;
use crate::limits::validate_visitor_name;
use crate::park::Park;
use crate::registry::TripRegistry;
use crate::trip::Trip;
use serde::Serialize;
use std::hash::{Hash, Hasher};
use ulid::Ulid;

/// Unique identifier for a visitor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct VisitorId(pub Ulid);

impl VisitorId {
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for VisitorId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for VisitorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A person who takes trips to parks
#[derive(Debug, Clone, Serialize)]
pub struct Visitor {
    id: VisitorId,
    name: String,
}

impl Visitor {
    /// Create a visitor; the name must be 1 to 15 characters
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_visitor_name(&name)?;
        Ok(Self {
            id: VisitorId::new(),
            name,
        })
    }

    pub fn id(&self) -> &VisitorId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename a registered visitor.
    ///
    /// The new name is written to `registry` first, so every query sees it
    /// immediately; this copy is then refreshed. On failure nothing changes.
    pub fn set_name<R: TripRegistry + ?Sized>(
        &mut self,
        registry: &R,
        name: impl Into<String>,
    ) -> Result<()> {
        *self = registry.rename_visitor(&self.id, name.into())?;
        Ok(())
    }

    pub(crate) fn assign_name(&mut self, name: String) -> Result<()> {
        validate_visitor_name(&name)?;
        self.name = name;
        Ok(())
    }

    /// Trips taken by this visitor, in creation order
    pub fn trips<R: TripRegistry + ?Sized>(&self, registry: &R) -> Result<Vec<Trip>> {
        registry.visitor_trips(self)
    }

    /// Distinct parks this visitor has been to
    pub fn national_parks<R: TripRegistry + ?Sized>(&self, registry: &R) -> Result<Vec<Park>> {
        registry.visitor_parks(self)
    }

    /// Number of this visitor's trips to `park`
    pub fn total_visits_at_park<R: TripRegistry + ?Sized>(
        &self,
        registry: &R,
        park: &Park,
    ) -> Result<usize> {
        registry.total_visits_at_park(self, park)
    }
}

impl PartialEq for Visitor {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Visitor {}

impl Hash for Visitor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::limits::ValidationError;
    use proptest::prelude::*;

    #[test]
    fn test_visitor_creation() {
        let visitor = Visitor::new("Ana").unwrap();
        assert_eq!(visitor.name(), "Ana");
    }

    #[test]
    fn test_visitor_name_bounds() {
        assert!(Visitor::new("").is_err());
        assert!(Visitor::new("A").is_ok());
        assert!(Visitor::new("Maximilianusxyz").is_ok()); // 15
        assert!(Visitor::new("Maximilianusxyzw").is_err()); // 16
    }

    #[test]
    fn test_assign_name() {
        let mut visitor = Visitor::new("Ana").unwrap();
        visitor.assign_name("Ana Maria".to_string()).unwrap();
        assert_eq!(visitor.name(), "Ana Maria");

        let err = visitor.assign_name(String::new()).unwrap_err();
        assert!(matches!(
            err.as_validation(),
            Some(ValidationError::VisitorNameLength { len: 0, .. })
        ));
        assert_eq!(visitor.name(), "Ana Maria");
    }

    #[test]
    fn test_rename_keeps_identity() {
        let original = Visitor::new("Ana").unwrap();
        let mut renamed = original.clone();
        renamed.assign_name("Anna".to_string()).unwrap();
        assert_eq!(original, renamed);
    }

    proptest! {
        #[test]
        fn prop_valid_names_construct_and_rename(
            name in "[A-Za-z]{1,15}",
            other in "[A-Za-z]{1,15}",
        ) {
            let mut visitor = Visitor::new(name).unwrap();
            prop_assert!(visitor.assign_name(other.clone()).is_ok());
            prop_assert_eq!(visitor.name(), other.as_str());
        }

        #[test]
        fn prop_long_names_rejected(name in "[A-Za-z]{16,40}") {
            prop_assert!(Visitor::new(name.clone()).is_err());
            let mut visitor = Visitor::new("Ana").unwrap();
            prop_assert!(visitor.assign_name(name).is_err());
        }
    }
}
