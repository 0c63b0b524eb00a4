//! Pure reducers: the single source of truth for action -> state
//! transitions.
//!
//! `reduce` never mutates its input. Every transition builds a new
//! `ProgramState` value, so previously held states remain valid snapshots.
//! `Err` means the action was rejected and the caller's state is unchanged;
//! not-found targets are silent no-ops, not errors.

mod exercise;
mod program;
mod set;
mod workout;

use crate::{Action, ProgramState, ReduceError};

/// Apply an action to the given state, returning the next state.
pub fn reduce(state: &ProgramState, action: &Action) -> Result<ProgramState, ReduceError> {
    let mut next = state.clone();
    match action {
        Action::Program(a) => program::reduce(a, &mut next)?,
        Action::Workout(a) => workout::reduce(a, &mut next)?,
        Action::Exercise(a) => exercise::reduce(a, &mut next)?,
        Action::Set(a) => set::reduce(a, &mut next)?,
    }
    Ok(next)
}
