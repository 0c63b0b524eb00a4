//! # liftplan-core
//!
//! The state engine for the liftplan program builder: an explicitly
//! constructed store around the pure reducers in `liftplan-types`, the
//! entity normalizers for raw JSON input, and the program-list
//! reconciliation used by the list page.

pub mod normalize;
pub mod reconcile;
pub mod store;

pub use normalize::{standardize_exercise, standardize_workout};
pub use reconcile::{reconcile_programs, ProgramIndex};
pub use store::{Store, SubscriptionId};
