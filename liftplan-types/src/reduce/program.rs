use crate::{ProgramAction, ProgramField, ProgramState, ReduceError, WorkoutState};

pub(super) fn reduce(action: &ProgramAction, state: &mut ProgramState) -> Result<(), ReduceError> {
    match action {
        ProgramAction::InitializeNew {
            program,
            workouts,
            active_workout,
        }
        | ProgramAction::InitializeEdit {
            program,
            workouts,
            active_workout,
        } => {
            state.program = program.clone();
            state.workout = WorkoutState {
                workouts: workouts.clone(),
                active_workout: active_workout.clone(),
            };
        }
        ProgramAction::UpdateField(field) => match field {
            ProgramField::Name(name) => state.program.name = name.clone(),
            ProgramField::ProgramDuration(d) => state.program.program_duration = *d,
            ProgramField::DurationUnit(u) => state.program.duration_unit = *u,
            ProgramField::DaysPerWeek(d) => state.program.days_per_week = *d,
            ProgramField::MainGoal(g) => state.program.main_goal = *g,
        },
        ProgramAction::UpdateFromServer {
            program,
            workouts,
            active_workout,
        } => {
            state.program = program.clone();
            state.workout = WorkoutState {
                workouts: workouts.clone(),
                active_workout: active_workout.clone(),
            };
            state.last_failure = None;
        }
        ProgramAction::RecordFailure(failure) => {
            state.last_failure = Some(failure.clone());
        }
        ProgramAction::Clear => {
            *state = ProgramState::default();
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::reduce::reduce;
    use crate::{
        Action, DurationUnit, Program, ProgramAction, ProgramField, ProgramState, RemoteFailure,
        RemoteOp, Workout,
    };

    fn initialized() -> ProgramState {
        let program = Program::default();
        let workout = Workout::empty(program.id.clone(), "Workout 1");
        reduce(
            &ProgramState::default(),
            &Action::Program(ProgramAction::InitializeNew {
                program,
                workouts: vec![workout],
                active_workout: None,
            }),
        )
        .unwrap()
    }

    #[test]
    fn initialize_replaces_program_and_workouts() {
        let state = initialized();
        assert_eq!(state.workout.workouts.len(), 1);
        assert_eq!(state.workout.active_workout, None);
    }

    #[test]
    fn update_field_merges_without_touching_workouts() {
        let state = initialized();
        let next = reduce(
            &state,
            &Action::Program(ProgramAction::UpdateField(ProgramField::DurationUnit(
                DurationUnit::Weeks,
            ))),
        )
        .unwrap();
        assert_eq!(next.program.duration_unit, DurationUnit::Weeks);
        assert_eq!(next.workout, state.workout);
        // prior state is an untouched snapshot
        assert_eq!(state.program.duration_unit, DurationUnit::Days);
    }

    #[test]
    fn clear_resets_to_default() {
        let state = initialized();
        let next = reduce(&state, &Action::Program(ProgramAction::Clear)).unwrap();
        assert!(next.workout.workouts.is_empty());
        assert_eq!(next.workout.active_workout, None);
        assert_eq!(next.last_failure, None);
    }

    #[test]
    fn server_update_clears_recorded_failure() {
        let state = initialized();
        let failed = reduce(
            &state,
            &Action::Program(ProgramAction::RecordFailure(RemoteFailure {
                op: RemoteOp::Update,
                message: "500 internal".into(),
            })),
        )
        .unwrap();
        assert!(failed.last_failure.is_some());

        let program = failed.program.clone();
        let workouts = failed.workout.workouts.clone();
        let active = Some(workouts[0].id.clone());
        let next = reduce(
            &failed,
            &Action::Program(ProgramAction::UpdateFromServer {
                program,
                workouts,
                active_workout: active.clone(),
            }),
        )
        .unwrap();
        assert_eq!(next.last_failure, None);
        assert_eq!(next.workout.active_workout, active);
    }

    #[test]
    fn record_failure_keeps_last_valid_state() {
        let state = initialized();
        let next = reduce(
            &state,
            &Action::Program(ProgramAction::RecordFailure(RemoteFailure {
                op: RemoteOp::Delete,
                message: "404".into(),
            })),
        )
        .unwrap();
        assert_eq!(next.workout, state.workout);
        assert_eq!(next.last_failure.as_ref().unwrap().op, RemoteOp::Delete);
    }
}
