//! Service layer for ironlog
//!
//! Sits between the HTTP/CLI front ends and the workout store: turns raw
//! requests into validated domain input and store results into typed errors.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]

mod error;
mod workout_service;

pub use error::ServiceError;
pub use workout_service::WorkoutService;
