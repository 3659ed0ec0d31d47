//! Domain logic for the application/project lifecycle.
//!
//! This crate has zero workspace deps so it can be used by the DB layer,
//! the API layer, and any future CLI tooling. Everything here is pure:
//! the deadline window calculator, the team composition validator, and
//! the two status state machines operate on values handed to them and
//! never touch storage.

pub mod application;
pub mod deadline;
pub mod error;
pub mod project;
pub mod team;
pub mod types;
