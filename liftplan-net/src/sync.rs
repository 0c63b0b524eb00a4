//! Background save worker.
//!
//! Remote persistence follows a fire, await, dispatch-on-completion
//! pattern: the caller dispatches its optimistic local edit synchronously,
//! hands the save to a background thread here, and pumps completed
//! outcomes back into the store as exactly one follow-up action each.
//! There is no cancellation and no dedup of in-flight requests; when two
//! saves race, the later completion wins at the dispatch layer.

use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;

use log::error;

use liftplan_types::{
    Action, EntityId, Program, ProgramAction, RemoteFailure, RemoteOp, Workout,
};

use crate::gateway::ProgramGateway;

/// Completion of one remote operation.
#[derive(Debug, Clone)]
pub enum SaveOutcome {
    Created {
        program: Program,
        workouts: Vec<Workout>,
    },
    Updated {
        program: Program,
        workouts: Vec<Workout>,
    },
    Deleted {
        program_id: EntityId,
    },
    Failed {
        op: RemoteOp,
        message: String,
    },
}

impl SaveOutcome {
    /// The single follow-up action for this outcome. Successful saves
    /// refresh the store from the server's view; failures are recorded
    /// for display; a completed delete needs no state change.
    ///
    /// `active_workout` is the selection to keep after a refresh,
    /// normally the one current at pump time.
    pub fn into_action(self, active_workout: Option<EntityId>) -> Option<Action> {
        match self {
            Self::Created { program, workouts } | Self::Updated { program, workouts } => {
                Some(Action::Program(ProgramAction::UpdateFromServer {
                    program,
                    workouts,
                    active_workout,
                }))
            }
            Self::Deleted { .. } => None,
            Self::Failed { op, message } => Some(Action::Program(ProgramAction::RecordFailure(
                RemoteFailure { op, message },
            ))),
        }
    }
}

/// Owns the completion channel and spawns one thread per remote
/// operation. The embedder calls [`SaveWorker::try_recv`] from its event
/// loop and dispatches the resulting actions.
pub struct SaveWorker {
    base_url: String,
    tx: Sender<SaveOutcome>,
    rx: Receiver<SaveOutcome>,
}

impl SaveWorker {
    pub fn new(base_url: impl Into<String>) -> Self {
        let (tx, rx) = channel();
        Self {
            base_url: base_url.into(),
            tx,
            rx,
        }
    }

    /// Next completed outcome, if any. Never blocks.
    pub fn try_recv(&self) -> Option<SaveOutcome> {
        self.rx.try_recv().ok()
    }

    pub fn spawn_create(&self, program: Program, workouts: Vec<Workout>) {
        let tx = self.tx.clone();
        let base_url = self.base_url.clone();
        thread::spawn(move || {
            let gateway = ProgramGateway::new(base_url);
            let outcome = match gateway.create_program(&program, &workouts) {
                Ok(saved) => SaveOutcome::Created {
                    program: saved.program,
                    workouts: saved.workouts,
                },
                Err(err) => {
                    error!("failed to save program: {}", err);
                    SaveOutcome::Failed {
                        op: RemoteOp::Create,
                        message: err.to_string(),
                    }
                }
            };
            let _ = tx.send(outcome);
        });
    }

    pub fn spawn_update(&self, program: Program, workouts: Vec<Workout>) {
        let tx = self.tx.clone();
        let base_url = self.base_url.clone();
        thread::spawn(move || {
            let gateway = ProgramGateway::new(base_url);
            // The update endpoint returns no body to rely on; echo the
            // submitted tree as the post-save view.
            let outcome = match gateway.update_program(&program, &workouts) {
                Ok(()) => SaveOutcome::Updated { program, workouts },
                Err(err) => {
                    error!("failed to update program: {}", err);
                    SaveOutcome::Failed {
                        op: RemoteOp::Update,
                        message: err.to_string(),
                    }
                }
            };
            let _ = tx.send(outcome);
        });
    }

    pub fn spawn_delete(&self, program_id: EntityId) {
        let tx = self.tx.clone();
        let base_url = self.base_url.clone();
        thread::spawn(move || {
            let gateway = ProgramGateway::new(base_url);
            let outcome = match gateway.delete_program(&program_id) {
                Ok(()) => SaveOutcome::Deleted { program_id },
                Err(err) => {
                    error!("failed to delete program: {}", err);
                    SaveOutcome::Failed {
                        op: RemoteOp::Delete,
                        message: err.to_string(),
                    }
                }
            };
            let _ = tx.send(outcome);
        });
    }
}
