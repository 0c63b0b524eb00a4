//! Blocking HTTP client for the program persistence API.

use log::error;
use reqwest::blocking::{Client, Response};
use serde_json::Value;

use liftplan_types::{CatalogExercise, EntityId, Equipment, Muscle, Program, Workout};

use crate::payload::{CreateProgramBody, SavedProgram, UpdateProgramBody};

/// Failure talking to the persistence gateway. Remote errors never mutate
/// local state; callers record them via `ProgramAction::RecordFailure`.
#[derive(Debug)]
pub enum GatewayError {
    /// Transport-level failure (connection refused, timeout, bad JSON).
    Transport(reqwest::Error),
    /// The server answered with a non-success status.
    Status { code: u16, body: String },
}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(err) => write!(f, "transport error: {}", err),
            Self::Status { code, body } => write!(f, "server returned {}: {}", code, body),
        }
    }
}

impl std::error::Error for GatewayError {}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err)
    }
}

/// Client for the program and catalog endpoints.
pub struct ProgramGateway {
    base_url: String,
    client: Client,
}

impl ProgramGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            client: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn check(resp: Response) -> Result<Response, GatewayError> {
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            error!("gateway request failed with {}: {}", status, body);
            return Err(GatewayError::Status {
                code: status.as_u16(),
                body,
            });
        }
        Ok(resp)
    }

    /// Fetch the raw program list for a user; input to reconciliation.
    pub fn fetch_programs(&self, user_id: i64) -> Result<Vec<Value>, GatewayError> {
        let resp = self
            .client
            .get(self.url(&format!("/api/users/{}/programs", user_id)))
            .send()?;
        Ok(Self::check(resp)?.json()?)
    }

    /// Save a new program. The server assigns ids and returns the saved
    /// tree.
    pub fn create_program(
        &self,
        program: &Program,
        workouts: &[Workout],
    ) -> Result<SavedProgram, GatewayError> {
        let body = CreateProgramBody::new(program, workouts);
        let resp = self
            .client
            .post(self.url("/api/programs"))
            .json(&body)
            .send()?;
        Ok(Self::check(resp)?.json()?)
    }

    /// Update an existing program. Workouts with non-persisted ids go to
    /// `workoutsToInsert`, the rest to `workoutsToUpdate`.
    pub fn update_program(
        &self,
        program: &Program,
        workouts: &[Workout],
    ) -> Result<(), GatewayError> {
        let body = UpdateProgramBody::new(program, workouts);
        let resp = self
            .client
            .put(self.url(&format!("/api/programs/{}", program.id)))
            .json(&body)
            .send()?;
        Self::check(resp)?;
        Ok(())
    }

    /// Delete a program. Non-success is surfaced but never retried.
    pub fn delete_program(&self, program_id: &EntityId) -> Result<(), GatewayError> {
        let resp = self
            .client
            .delete(self.url(&format!("/api/programs/{}", program_id)))
            .send()?;
        Self::check(resp)?;
        Ok(())
    }

    pub fn fetch_exercise_catalog(&self) -> Result<Vec<CatalogExercise>, GatewayError> {
        let resp = self.client.get(self.url("/api/exercise-catalog")).send()?;
        Ok(Self::check(resp)?.json()?)
    }

    pub fn fetch_muscles(&self) -> Result<Vec<Muscle>, GatewayError> {
        let resp = self.client.get(self.url("/api/muscles")).send()?;
        Ok(Self::check(resp)?.json()?)
    }

    pub fn fetch_equipments(&self) -> Result<Vec<Equipment>, GatewayError> {
        let resp = self.client.get(self.url("/api/equipments")).send()?;
        Ok(Self::check(resp)?.json()?)
    }
}
