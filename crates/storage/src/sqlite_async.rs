//! Async trait implementation for SQLite `Storage` via `spawn_blocking`.

use async_trait::async_trait;
use ironlog_core::{NewWorkout, Workout, WorkoutFilter, WorkoutWithSets};

use crate::error::StorageError;
use crate::storage::StoreCounts;
use crate::traits::WorkoutStore;
use crate::Storage;

/// Helper: run a blocking closure on the tokio blocking pool.
async fn blocking<F, T>(f: F) -> Result<T, StorageError>
where
    F: FnOnce() -> Result<T, StorageError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| StorageError::Blocking(format!("spawn_blocking join error: {e}")))?
}

/// Body-generating macro for async-to-blocking delegation.
///
/// Each argument is annotated with a capture kind:
/// - `@ref arg`: `.clone()` a `&T`, pass as `&arg`
/// - `@val arg`: move directly (Copy/owned types)
macro_rules! delegate {
    ($self:ident, $method:ident $(, @$kind:ident $arg:ident)*) => {{
        let s = $self.clone();
        $(delegate!(@capture $kind $arg);)*
        blocking(move || s.$method($(delegate!(@pass $kind $arg)),*)).await
    }};
    (@capture ref $arg:ident) => { let $arg = $arg.clone(); };
    (@capture val $arg:ident) => { };
    (@pass ref $arg:ident) => { &$arg };
    (@pass val $arg:ident) => { $arg };
}

#[async_trait]
impl WorkoutStore for Storage {
    async fn create_workout(&self, workout: &NewWorkout) -> Result<i64, StorageError> {
        delegate!(self, create_workout, @ref workout)
    }
    async fn list_workouts(
        &self,
        filter: &WorkoutFilter,
    ) -> Result<Vec<WorkoutWithSets>, StorageError> {
        delegate!(self, list_workouts, @ref filter)
    }
    async fn get_workout(&self, id: i64) -> Result<Option<Workout>, StorageError> {
        delegate!(self, get_workout, @val id)
    }
    async fn get_workout_with_sets(
        &self,
        id: i64,
    ) -> Result<Option<WorkoutWithSets>, StorageError> {
        delegate!(self, get_workout_with_sets, @val id)
    }
    async fn delete_workout(&self, id: i64) -> Result<usize, StorageError> {
        delegate!(self, delete_workout, @val id)
    }
    async fn list_exercise_names(&self) -> Result<Vec<String>, StorageError> {
        delegate!(self, list_exercise_names)
    }
    async fn counts(&self) -> Result<StoreCounts, StorageError> {
        delegate!(self, counts)
    }
}
