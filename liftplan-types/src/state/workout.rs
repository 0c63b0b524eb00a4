//! Workout entity.

use serde::{Deserialize, Serialize};

use super::exercise::Exercise;
use crate::EntityId;

/// A named collection of exercises within a program.
///
/// `program_id` is an informational back-reference used for filtering
/// during list reconciliation, not an ownership edge. Raw server data may
/// omit it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub id: EntityId,
    #[serde(rename = "programId", default)]
    pub program_id: Option<EntityId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub exercises: Vec<Exercise>,
}

impl Workout {
    /// A fresh, empty workout attached to the given program.
    pub fn empty(program_id: EntityId, name: impl Into<String>) -> Self {
        Self {
            id: EntityId::fresh(),
            program_id: Some(program_id),
            name: name.into(),
            exercises: Vec::new(),
        }
    }

    pub fn exercise_by_id(&self, id: &EntityId) -> Option<&Exercise> {
        self.exercises.iter().find(|e| &e.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_workout_has_fresh_local_id() {
        let w = Workout::empty(EntityId::Persisted(3), "Leg Day");
        assert!(!w.id.is_persisted());
        assert_eq!(w.program_id, Some(EntityId::Persisted(3)));
        assert!(w.exercises.is_empty());
    }

    #[test]
    fn program_id_round_trips_as_camel_case() {
        let w = Workout::empty(EntityId::from("p1"), "Push");
        let json = serde_json::to_value(&w).unwrap();
        assert_eq!(json["programId"], "p1");
    }
}
