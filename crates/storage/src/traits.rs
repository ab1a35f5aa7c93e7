//! Storage trait abstraction
//!
//! Async seam between the service layer and the blocking `SQLite`
//! repository. Implemented for [`crate::Storage`] in `sqlite_async`.

use async_trait::async_trait;
use ironlog_core::{NewWorkout, Workout, WorkoutFilter, WorkoutWithSets};

use crate::error::StorageError;
use crate::storage::StoreCounts;

/// Workout persistence and query operations.
#[async_trait]
pub trait WorkoutStore: Send + Sync {
    /// Insert a workout and its sets atomically. Returns the new workout id.
    async fn create_workout(&self, workout: &NewWorkout) -> Result<i64, StorageError>;

    /// Filtered list, newest first, sets attached in `set_index` order.
    async fn list_workouts(&self, filter: &WorkoutFilter)
    -> Result<Vec<WorkoutWithSets>, StorageError>;

    /// Single workout row without sets.
    async fn get_workout(&self, id: i64) -> Result<Option<Workout>, StorageError>;

    /// Single workout with its sets.
    async fn get_workout_with_sets(&self, id: i64)
    -> Result<Option<WorkoutWithSets>, StorageError>;

    /// Delete a workout and its sets atomically. Returns workout rows removed (0 or 1).
    async fn delete_workout(&self, id: i64) -> Result<usize, StorageError>;

    /// Distinct exercise names by usage count, then name.
    async fn list_exercise_names(&self) -> Result<Vec<String>, StorageError>;

    /// Row counts of workouts and sets.
    async fn counts(&self) -> Result<StoreCounts, StorageError>;
}
