//! The state store: an explicitly constructed instance with a
//! `new`/`dispatch`/`subscribe`/`teardown` lifecycle, injected into the
//! embedding layer rather than reachable as a global singleton.
//!
//! Dispatch is synchronous and runs to completion before the next action
//! is processed; remote persistence never holds a lock over the store
//! (see `liftplan-net::sync`).

use log::error;
use serde_json::Value;

use liftplan_types::reduce::reduce;
use liftplan_types::{
    Action, EntityId, ExerciseAction, Program, ProgramAction, ProgramState, ReduceError, Workout,
};

use crate::normalize::standardize_exercise;

/// Handle returned by [`Store::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&ProgramState)>;

pub struct Store {
    state: ProgramState,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    pub fn new() -> Self {
        Self {
            state: ProgramState::default(),
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// The current state. Callers needing a durable snapshot should
    /// [`Store::snapshot`] it; dispatches replace the value wholesale.
    pub fn state(&self) -> &ProgramState {
        &self.state
    }

    pub fn snapshot(&self) -> ProgramState {
        self.state.clone()
    }

    /// Run an action through the reducer. On success the new state
    /// replaces the old and subscribers are notified; on rejection the
    /// error is logged and the store keeps its last valid state.
    pub fn dispatch(&mut self, action: Action) -> Result<(), ReduceError> {
        match reduce(&self.state, &action) {
            Ok(next) => {
                self.state = next;
                for (_, subscriber) in &mut self.subscribers {
                    subscriber(&self.state);
                }
                Ok(())
            }
            Err(err) => {
                error!("dispatch rejected: {}", err);
                Err(err)
            }
        }
    }

    /// Register a callback invoked after every successful dispatch.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&ProgramState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.retain(|(sid, _)| *sid != id);
    }

    /// Drop all subscribers and reset to the empty state.
    pub fn teardown(&mut self) {
        self.subscribers.clear();
        self.state = ProgramState::default();
    }

    // ------------------------------------------------------------------
    // Convenience entry points for the edit flow
    // ------------------------------------------------------------------

    /// Start a fresh program: one generated program id, one empty
    /// "Workout 1", no active selection.
    pub fn initialize_new_program(&mut self, user_id: Option<i64>) {
        let program = Program {
            user_id,
            name: "Program 1".into(),
            ..Program::default()
        };
        let workout = Workout::empty(program.id.clone(), "Workout 1");
        // InitializeNew never rejects
        let _ = self.dispatch(Action::Program(ProgramAction::InitializeNew {
            program,
            workouts: vec![workout],
            active_workout: None,
        }));
    }

    /// Load an existing program for editing. The first workout becomes
    /// active, or none when the list is empty.
    pub fn initialize_edit_program(&mut self, program: Program, workouts: Vec<Workout>) {
        let active_workout = workouts.first().map(|w| w.id.clone());
        let _ = self.dispatch(Action::Program(ProgramAction::InitializeEdit {
            program,
            workouts,
            active_workout,
        }));
    }

    /// Validate and standardize a raw exercise payload, then dispatch
    /// `Exercise::Add` for the given workout. Rejects payloads that are
    /// not a JSON array before anything reaches the reducer.
    pub fn add_raw_exercises(
        &mut self,
        workout_id: EntityId,
        raw: &Value,
    ) -> Result<(), ReduceError> {
        let Some(entries) = raw.as_array() else {
            let err = ReduceError::InvalidPayload("exercises payload is not a list".into());
            error!("{}", err);
            return Err(err);
        };
        let exercises = entries
            .iter()
            .filter_map(standardize_exercise)
            .map(|mut exercise| {
                // Each added instance gets its own id; raw catalog rows
                // carry their catalog id in `id`.
                let raw_id = std::mem::replace(&mut exercise.id, EntityId::fresh());
                if exercise.catalog_exercise_id.is_none() {
                    exercise.catalog_exercise_id = Some(raw_id);
                }
                exercise
            })
            .collect();
        self.dispatch(Action::Exercise(ExerciseAction::Add {
            workout_id,
            exercises,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::Cell;
    use std::rc::Rc;

    use liftplan_types::WorkoutAction;

    #[test]
    fn initialize_new_creates_one_empty_workout() {
        let mut store = Store::new();
        store.initialize_new_program(Some(2));
        let state = store.state();
        assert_eq!(state.program.name, "Program 1");
        assert_eq!(state.program.user_id, Some(2));
        assert_eq!(state.workout.workouts.len(), 1);
        assert_eq!(state.workout.workouts[0].name, "Workout 1");
        assert_eq!(state.workout.active_workout, None);
    }

    #[test]
    fn initialize_edit_activates_the_first_workout() {
        let mut store = Store::new();
        let program = Program::default();
        let workouts = vec![
            Workout::empty(program.id.clone(), "Push"),
            Workout::empty(program.id.clone(), "Pull"),
        ];
        let first = workouts[0].id.clone();
        store.initialize_edit_program(program, workouts);
        assert_eq!(store.state().workout.active_workout, Some(first));
    }

    #[test]
    fn initialize_edit_with_no_workouts_leaves_selection_empty() {
        let mut store = Store::new();
        store.initialize_edit_program(Program::default(), Vec::new());
        assert_eq!(store.state().workout.active_workout, None);
    }

    #[test]
    fn add_raw_exercises_rejects_non_array_payload() {
        let mut store = Store::new();
        store.initialize_new_program(None);
        let before = store.snapshot();
        let workout_id = store.state().workout.workouts[0].id.clone();
        let err = store
            .add_raw_exercises(workout_id, &json!({"not": "a list"}))
            .unwrap_err();
        assert!(matches!(err, ReduceError::InvalidPayload(_)));
        assert_eq!(store.state(), &before);
    }

    #[test]
    fn add_raw_exercises_maps_catalog_rows() {
        let mut store = Store::new();
        store.initialize_new_program(None);
        let workout_id = store.state().workout.workouts[0].id.clone();
        store
            .dispatch(Action::Workout(WorkoutAction::SetActive(Some(
                workout_id.clone(),
            ))))
            .unwrap();

        // A catalog row: its `id` is the catalog exercise id.
        store
            .add_raw_exercises(
                workout_id.clone(),
                &json!([{"id": 7, "name": "Bench Press", "muscle": "chest"}]),
            )
            .unwrap();

        let workout = store.state().workout_by_id(&workout_id).unwrap();
        let ex = &workout.exercises[0];
        assert_eq!(ex.catalog_exercise_id, Some(EntityId::Persisted(7)));
        assert!(!ex.id.is_persisted());
        assert_eq!(ex.order, 1);
    }

    #[test]
    fn rejected_dispatch_keeps_last_valid_state() {
        let mut store = Store::new();
        store.initialize_new_program(None);
        let before = store.snapshot();
        let err = store.dispatch(Action::Exercise(ExerciseAction::Remove {
            workout_id: EntityId::from("not-active"),
            exercise_id: EntityId::from("x"),
        }));
        assert!(err.is_err());
        assert_eq!(store.state(), &before);
    }

    #[test]
    fn subscribers_fire_on_success_only() {
        let mut store = Store::new();
        let count = Rc::new(Cell::new(0));
        let seen = count.clone();
        let id = store.subscribe(move |_| seen.set(seen.get() + 1));

        store.initialize_new_program(None);
        assert_eq!(count.get(), 1);

        // Rejected dispatch must not notify.
        let _ = store.dispatch(Action::Exercise(ExerciseAction::Remove {
            workout_id: EntityId::from("ghost"),
            exercise_id: EntityId::from("x"),
        }));
        assert_eq!(count.get(), 1);

        store.unsubscribe(id);
        store.initialize_new_program(None);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn teardown_resets_state_and_drops_subscribers() {
        let mut store = Store::new();
        store.initialize_new_program(None);
        store.subscribe(|_| {});
        store.teardown();
        assert!(store.state().workout.workouts.is_empty());
        store.initialize_new_program(None); // no subscriber panic, state works
        assert_eq!(store.state().workout.workouts.len(), 1);
    }
}
