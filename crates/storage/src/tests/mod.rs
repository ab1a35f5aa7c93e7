//! Test utilities and module declarations for storage tests.

use crate::Storage;
use ironlog_core::{NewSet, NewWorkout};
use tempfile::TempDir;

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn create_test_storage() -> (Storage, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let storage = Storage::new(&db_path).unwrap();
    (storage, temp_dir)
}

/// Build a validated workout from `(weight, reps)` pairs.
#[expect(clippy::unwrap_used, reason = "test code")]
pub fn new_workout(date: &str, exercise: &str, sets: &[(f64, i64)]) -> NewWorkout {
    let sets = sets.iter().map(|&(weight, reps)| NewSet { weight, reps }).collect();
    NewWorkout::new(date, exercise, None, sets).unwrap()
}

mod exercise_tests;
mod filter_tests;
