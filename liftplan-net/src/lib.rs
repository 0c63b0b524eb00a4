//! # liftplan-net
//!
//! Persistence gateway for the liftplan program builder: wire payloads,
//! a blocking HTTP client for the program/catalog API, and the background
//! save worker that feeds completions back into the store as actions.

pub mod gateway;
pub mod payload;
pub mod sync;

pub use gateway::{GatewayError, ProgramGateway};
pub use payload::{CreateProgramBody, SavedProgram, UpdateProgramBody};
pub use sync::{SaveOutcome, SaveWorker};
