//! Wire payload types for the program persistence API.
//!
//! Create bodies nest the full workout/exercise/set tree; update bodies
//! additionally split workouts into `workoutsToInsert` and
//! `workoutsToUpdate`, routed solely by whether each workout's id is
//! server-assigned.

use serde::{Deserialize, Serialize};

use liftplan_types::state::exercise::metric;
use liftplan_types::{EntityId, Exercise, Program, Set, Workout};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateSet {
    #[serde(with = "metric")]
    pub reps: Option<f64>,
    #[serde(with = "metric")]
    pub weight: Option<f64>,
    pub order: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateExercise {
    pub catalog_exercise_id: EntityId,
    pub order: u32,
    pub sets: Vec<CreateSet>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateWorkout {
    pub id: EntityId,
    pub name: String,
    pub order: u32,
    pub exercises: Vec<CreateExercise>,
}

/// Body for `POST /api/programs`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateProgramBody<'a> {
    #[serde(flatten)]
    pub program: &'a Program,
    pub workouts: Vec<CreateWorkout>,
}

impl<'a> CreateProgramBody<'a> {
    pub fn new(program: &'a Program, workouts: &[Workout]) -> Self {
        Self {
            program,
            workouts: workouts.iter().map(CreateWorkout::from_workout).collect(),
        }
    }
}

impl CreateWorkout {
    fn from_workout(workout: &Workout) -> Self {
        Self {
            id: workout.id.clone(),
            name: workout.name.clone(),
            order: 1,
            exercises: workout
                .exercises
                .iter()
                .map(CreateExercise::from_exercise)
                .collect(),
        }
    }
}

impl CreateExercise {
    fn from_exercise(exercise: &Exercise) -> Self {
        Self {
            // Exercises added straight from a catalog row may carry the
            // catalog id in their instance id.
            catalog_exercise_id: exercise
                .catalog_exercise_id
                .clone()
                .unwrap_or_else(|| exercise.id.clone()),
            order: exercise.order.max(1),
            sets: exercise
                .sets
                .iter()
                .enumerate()
                .map(|(index, set)| CreateSet::from_set(set, index))
                .collect(),
        }
    }
}

impl CreateSet {
    fn from_set(set: &Set, index: usize) -> Self {
        Self {
            reps: set.reps,
            weight: set.weight,
            order: if set.order == 0 {
                index as u32 + 1
            } else {
                set.order
            },
        }
    }
}

/// Body for `PUT /api/programs/{id}`: the full program plus the
/// insert/update routing lists.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProgramBody<'a> {
    #[serde(flatten)]
    pub program: &'a Program,
    pub workouts: &'a [Workout],
    pub workouts_to_insert: Vec<&'a Workout>,
    pub workouts_to_update: Vec<&'a Workout>,
}

impl<'a> UpdateProgramBody<'a> {
    pub fn new(program: &'a Program, workouts: &'a [Workout]) -> Self {
        let (workouts_to_update, workouts_to_insert): (Vec<&Workout>, Vec<&Workout>) =
            workouts.iter().partition(|w| w.id.is_persisted());
        Self {
            program,
            workouts,
            workouts_to_insert,
            workouts_to_update,
        }
    }
}

/// A saved program as returned by the gateway: program fields at the top
/// level with the workout tree embedded.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SavedProgram {
    #[serde(flatten)]
    pub program: Program,
    #[serde(default)]
    pub workouts: Vec<Workout>,
}
