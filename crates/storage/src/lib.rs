//! Storage layer for ironlog
//!
//! SQLite-backed workout repository. All writes run in `IMMEDIATE`
//! transactions over a pooled connection; reads of a workout list run in a
//! single read transaction so sets and workouts come from one snapshot.

mod error;
mod migrations;
mod sqlite_async;
mod storage;
#[cfg(test)]
mod tests;
pub mod traits;

pub use error::StorageError;
pub use storage::{Storage, StoreCounts};
pub use traits::WorkoutStore;
