//! Action types for the dispatch system.
//!
//! Actions represent user intents that flow through the store. The enum is
//! closed and exhaustively matched in `reduce`, so adding an action kind is
//! a compile-time-checked change.

use serde::{Deserialize, Serialize};

use crate::{
    DurationUnit, EntityId, Exercise, MainGoal, Program, RemoteFailure, SetPatch, Workout,
};

/// One typed field of the program record, for shallow field updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ProgramField {
    Name(String),
    ProgramDuration(u32),
    DurationUnit(DurationUnit),
    DaysPerWeek(u32),
    MainGoal(MainGoal),
}

/// One typed field of the workout sub-state (not of a specific workout).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WorkoutField {
    Workouts(Vec<Workout>),
    ActiveWorkout(Option<EntityId>),
}

/// Program-level actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ProgramAction {
    /// Replace program and workout sub-state wholesale, for a freshly
    /// created program.
    InitializeNew {
        program: Program,
        workouts: Vec<Workout>,
        active_workout: Option<EntityId>,
    },
    /// Replace program and workout sub-state wholesale, for a program
    /// loaded from the gateway.
    InitializeEdit {
        program: Program,
        workouts: Vec<Workout>,
        active_workout: Option<EntityId>,
    },
    /// Merge one field into the program.
    UpdateField(ProgramField),
    /// Merge program fields and replace workouts after a successful
    /// remote save/update. Clears any recorded failure.
    UpdateFromServer {
        program: Program,
        workouts: Vec<Workout>,
        active_workout: Option<EntityId>,
    },
    /// Record a failed remote operation for user display.
    RecordFailure(RemoteFailure),
    /// Reset to the default empty state.
    Clear,
}

/// Workout-level actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WorkoutAction {
    /// Set the active-workout selector unconditionally.
    SetActive(Option<EntityId>),
    /// Append a workout to the list.
    Add(Workout),
    /// Merge one field into the workout sub-state.
    UpdateField(WorkoutField),
    /// Replace the workout whose id matches; no match leaves the state
    /// unchanged.
    Update(Workout),
    /// Remove a workout; clears the selector if it was active.
    Delete(EntityId),
}

/// Exercise-level actions. `Add` and `Remove` are only accepted for the
/// active workout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ExerciseAction {
    /// Append exercises not already present (by `catalog_exercise_id`),
    /// assigning contiguous order and defaulting empty set lists to one
    /// blank set.
    Add {
        workout_id: EntityId,
        exercises: Vec<Exercise>,
    },
    /// Replace the full exercise list verbatim. The caller is responsible
    /// for order/id integrity; used after a client-side reorder.
    UpdateAll {
        workout_id: EntityId,
        exercises: Vec<Exercise>,
    },
    /// Remove by exercise id and renumber the remainder 1..=n.
    Remove {
        workout_id: EntityId,
        exercise_id: EntityId,
    },
}

/// Set-level actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SetAction {
    /// Append a blank set with `order = len + 1`.
    Add {
        workout_id: EntityId,
        exercise_id: EntityId,
    },
    /// Merge patch fields into the set matching `patch.id`.
    Update {
        workout_id: EntityId,
        exercise_id: EntityId,
        patch: SetPatch,
    },
    /// Remove a set by id. Matches the exercise by `catalog_exercise_id`
    /// and does not renumber the remaining sets; see `reduce::set`.
    Remove {
        workout_id: EntityId,
        exercise_id: EntityId,
        set_id: EntityId,
    },
}

/// All state mutations accepted by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Action {
    Program(ProgramAction),
    Workout(WorkoutAction),
    Exercise(ExerciseAction),
    Set(SetAction),
}

impl From<ProgramAction> for Action {
    fn from(a: ProgramAction) -> Self {
        Self::Program(a)
    }
}

impl From<WorkoutAction> for Action {
    fn from(a: WorkoutAction) -> Self {
        Self::Workout(a)
    }
}

impl From<ExerciseAction> for Action {
    fn from(a: ExerciseAction) -> Self {
        Self::Exercise(a)
    }
}

impl From<SetAction> for Action {
    fn from(a: SetAction) -> Self {
        Self::Set(a)
    }
}
