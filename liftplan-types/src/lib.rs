//! # liftplan-types
//!
//! Shared type definitions for the liftplan program builder.
//! This crate contains the entity model (programs, workouts, exercises,
//! sets), the action protocol, and the pure reducers used by both
//! liftplan-core and liftplan-net.

pub mod action;
mod catalog;
pub mod reduce;
pub mod reorder;
pub mod state;

pub use action::*;
pub use catalog::{CatalogExercise, Equipment, Muscle};
pub use reorder::reorder_exercises;

// Re-export all state types at crate root for convenience
pub use state::*;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity of a program, workout, exercise, or set.
///
/// `Persisted` ids are assigned by the server; `Local` ids are generated
/// client-side before the entity has ever been saved. The variant is the
/// sole signal used to route records into insert vs. update on save.
///
/// On the wire a `Persisted` id is a JSON integer and a `Local` id a JSON
/// string, matching what the persistence gateway expects.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Persisted(i64),
    Local(String),
}

impl EntityId {
    /// Generate a fresh client-side id (v4 UUID, 128-bit random).
    pub fn fresh() -> Self {
        Self::Local(Uuid::new_v4().to_string())
    }

    /// Whether this entity has been assigned a server id.
    pub fn is_persisted(&self) -> bool {
        matches!(self, Self::Persisted(_))
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Persisted(n) => write!(f, "{}", n),
            Self::Local(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for EntityId {
    fn from(id: i64) -> Self {
        Self::Persisted(id)
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        Self::Local(id.to_string())
    }
}

/// Why a dispatched action was rejected. The state is left untouched in
/// every rejection case.
#[derive(Debug, Clone, PartialEq)]
pub enum ReduceError {
    /// The action targeted a workout that is not the active workout.
    NotActiveWorkout {
        requested: EntityId,
        active: Option<EntityId>,
    },
    /// The payload had the wrong shape (e.g. exercises not a list).
    InvalidPayload(String),
}

impl std::fmt::Display for ReduceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotActiveWorkout { requested, active } => match active {
                Some(active) => write!(
                    f,
                    "workout {} does not match the active workout {}",
                    requested, active
                ),
                None => write!(
                    f,
                    "workout {} does not match the active workout (none selected)",
                    requested
                ),
            },
            Self::InvalidPayload(msg) => write!(f, "invalid payload: {}", msg),
        }
    }
}

impl std::error::Error for ReduceError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_ids_are_unique_and_local() {
        let a = EntityId::fresh();
        let b = EntityId::fresh();
        assert_ne!(a, b);
        assert!(!a.is_persisted());
    }

    #[test]
    fn integer_id_deserializes_as_persisted() {
        let id: EntityId = serde_json::from_str("42").unwrap();
        assert_eq!(id, EntityId::Persisted(42));
        assert!(id.is_persisted());
    }

    #[test]
    fn string_id_deserializes_as_local() {
        let id: EntityId = serde_json::from_str("\"abc-123\"").unwrap();
        assert_eq!(id, EntityId::Local("abc-123".into()));
        assert!(!id.is_persisted());
    }

    #[test]
    fn id_serialization_preserves_wire_shape() {
        assert_eq!(
            serde_json::to_string(&EntityId::Persisted(7)).unwrap(),
            "7"
        );
        assert_eq!(
            serde_json::to_string(&EntityId::from("w1")).unwrap(),
            "\"w1\""
        );
    }
}
