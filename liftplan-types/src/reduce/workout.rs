use crate::{ProgramState, ReduceError, WorkoutAction, WorkoutField};

pub(super) fn reduce(action: &WorkoutAction, state: &mut ProgramState) -> Result<(), ReduceError> {
    match action {
        WorkoutAction::SetActive(id) => {
            state.workout.active_workout = id.clone();
        }
        WorkoutAction::Add(workout) => {
            state.workout.workouts.push(workout.clone());
        }
        WorkoutAction::UpdateField(field) => match field {
            WorkoutField::Workouts(workouts) => state.workout.workouts = workouts.clone(),
            WorkoutField::ActiveWorkout(id) => state.workout.active_workout = id.clone(),
        },
        WorkoutAction::Update(updated) => {
            for workout in &mut state.workout.workouts {
                if workout.id == updated.id {
                    *workout = updated.clone();
                }
            }
        }
        WorkoutAction::Delete(workout_id) => {
            state.workout.workouts.retain(|w| &w.id != workout_id);
            if state.workout.active_workout.as_ref() == Some(workout_id) {
                state.workout.active_workout = None;
            }
        }
    }
    Ok(())
}
