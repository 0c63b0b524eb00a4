//! Read-only reference data served by the catalog endpoints.

use serde::{Deserialize, Serialize};

use crate::EntityId;

/// A catalog entry describing an exercise type. Workout exercises point
/// back at one of these via `catalog_exercise_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogExercise {
    pub id: EntityId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub muscle: String,
    #[serde(default)]
    pub equipment: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Muscle {
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub id: i64,
    #[serde(default)]
    pub name: String,
}
