use crate::{ProgramState, ReduceError, Set, SetAction};

pub(super) fn reduce(action: &SetAction, state: &mut ProgramState) -> Result<(), ReduceError> {
    match action {
        SetAction::Add {
            workout_id,
            exercise_id,
        } => {
            if let Some(workout) = state
                .workout
                .workouts
                .iter_mut()
                .find(|w| &w.id == workout_id)
            {
                if let Some(exercise) = workout
                    .exercises
                    .iter_mut()
                    .find(|e| &e.id == exercise_id)
                {
                    let order = exercise.sets.len() as u32 + 1;
                    exercise.sets.push(Set::blank(order));
                }
            }
        }
        SetAction::Update {
            workout_id,
            exercise_id,
            patch,
        } => {
            if let Some(workout) = state
                .workout
                .workouts
                .iter_mut()
                .find(|w| &w.id == workout_id)
            {
                if let Some(exercise) = workout
                    .exercises
                    .iter_mut()
                    .find(|e| &e.id == exercise_id)
                {
                    if let Some(set) = exercise.sets.iter_mut().find(|s| s.id == patch.id) {
                        if let Some(order) = patch.order {
                            set.order = order;
                        }
                        if let Some(reps) = patch.reps {
                            set.reps = reps;
                        }
                        if let Some(weight) = patch.weight {
                            set.weight = weight;
                        }
                        if let Some(unit) = patch.unit {
                            set.unit = unit;
                        }
                    }
                }
            }
        }
        // Removal matches the exercise by catalog_exercise_id rather than
        // instance id, and leaves the remaining sets' order untouched.
        // Both behaviors are kept for wire compatibility with the existing
        // gateway; see DESIGN.md before "fixing" either.
        SetAction::Remove {
            workout_id,
            exercise_id,
            set_id,
        } => {
            if let Some(workout) = state
                .workout
                .workouts
                .iter_mut()
                .find(|w| &w.id == workout_id)
            {
                if let Some(exercise) = workout
                    .exercises
                    .iter_mut()
                    .find(|e| e.catalog_exercise_id.as_ref() == Some(exercise_id))
                {
                    exercise.sets.retain(|s| &s.id != set_id);
                }
            }
        }
    }
    Ok(())
}
