use std::collections::HashSet;

use crate::{EntityId, ExerciseAction, ProgramState, ReduceError, Set};

/// Reject exercise mutations that target anything other than the active
/// workout.
fn require_active(state: &ProgramState, workout_id: &EntityId) -> Result<(), ReduceError> {
    if state.workout.active_workout.as_ref() != Some(workout_id) {
        return Err(ReduceError::NotActiveWorkout {
            requested: workout_id.clone(),
            active: state.workout.active_workout.clone(),
        });
    }
    Ok(())
}

pub(super) fn reduce(action: &ExerciseAction, state: &mut ProgramState) -> Result<(), ReduceError> {
    match action {
        ExerciseAction::Add {
            workout_id,
            exercises,
        } => {
            require_active(state, workout_id)?;
            let Some(workout) = state
                .workout
                .workouts
                .iter_mut()
                .find(|w| &w.id == workout_id)
            else {
                return Ok(());
            };

            // Duplicate-add (same catalog exercise) is a filter, not an error.
            let existing: HashSet<EntityId> = workout
                .exercises
                .iter()
                .filter_map(|e| e.catalog_exercise_id.clone())
                .collect();
            let incoming: Vec<_> = exercises
                .iter()
                .filter(|e| match &e.catalog_exercise_id {
                    Some(cid) => !existing.contains(cid),
                    None => true,
                })
                .cloned()
                .collect();

            let base = workout.exercises.len() as u32;
            for (index, mut exercise) in incoming.into_iter().enumerate() {
                exercise.order = base + index as u32 + 1;
                if exercise.sets.is_empty() {
                    exercise.sets = vec![Set::blank(1)];
                }
                workout.exercises.push(exercise);
            }
        }
        ExerciseAction::UpdateAll {
            workout_id,
            exercises,
        } => {
            if let Some(workout) = state
                .workout
                .workouts
                .iter_mut()
                .find(|w| &w.id == workout_id)
            {
                workout.exercises = exercises.clone();
            }
        }
        ExerciseAction::Remove {
            workout_id,
            exercise_id,
        } => {
            require_active(state, workout_id)?;
            if let Some(workout) = state
                .workout
                .workouts
                .iter_mut()
                .find(|w| &w.id == workout_id)
            {
                workout.exercises.retain(|e| &e.id != exercise_id);
                for (index, exercise) in workout.exercises.iter_mut().enumerate() {
                    exercise.order = index as u32 + 1;
                }
            }
        }
    }
    Ok(())
}
