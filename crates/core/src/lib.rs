//! Core types for ironlog
//!
//! Domain types shared by the storage, service, HTTP and CLI crates,
//! together with request validation and the top-set trend.

mod constants;
mod env_config;
mod error;
mod input;
mod trend;
mod workout;

pub use constants::*;
pub use env_config::env_parse_with_default;
pub use error::ValidationError;
pub use input::{
    CreateWorkout, FilterParams, NewSet, NewWorkout, SetInput, WorkoutFilter, parse_date, parse_id,
};
pub use trend::{TrendPoint, TrendSummary, top_set_trend};
pub use workout::{Workout, WorkoutSet, WorkoutWithSets};
