pub mod exercise;
pub mod program;
pub mod workout;

pub use exercise::{Exercise, Set, SetPatch, WeightUnit};
pub use program::{DurationUnit, MainGoal, Program};
pub use workout::Workout;

use serde::{Deserialize, Serialize};

use crate::EntityId;

/// Which remote operation a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RemoteOp {
    Create,
    Update,
    Delete,
}

impl RemoteOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

/// A failed remote save/update/delete, kept in state for user display.
/// Cleared by the next successful server round-trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteFailure {
    pub op: RemoteOp,
    pub message: String,
}

impl std::fmt::Display for RemoteFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "program {} failed: {}", self.op.as_str(), self.message)
    }
}

/// Workout sub-state: the denormalized workout list plus the single
/// active-workout selector.
///
/// `active_workout` must reference an existing workout or be `None`;
/// deleting the active workout clears it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WorkoutState {
    pub workouts: Vec<Workout>,
    pub active_workout: Option<EntityId>,
}

/// Top-level state value held by the store. One program is resident at a
/// time; all mutation goes through the action protocol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramState {
    pub program: Program,
    pub workout: WorkoutState,
    pub last_failure: Option<RemoteFailure>,
}

impl Default for ProgramState {
    fn default() -> Self {
        Self {
            program: Program::default(),
            workout: WorkoutState::default(),
            last_failure: None,
        }
    }
}

impl ProgramState {
    /// Look up a workout by id.
    pub fn workout_by_id(&self, id: &EntityId) -> Option<&Workout> {
        self.workout.workouts.iter().find(|w| &w.id == id)
    }

    /// The currently active workout, if one is selected.
    pub fn active_workout(&self) -> Option<&Workout> {
        self.workout
            .active_workout
            .as_ref()
            .and_then(|id| self.workout_by_id(id))
    }
}
