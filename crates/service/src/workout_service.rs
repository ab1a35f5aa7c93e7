use std::sync::Arc;

use ironlog_core::{
    CreateWorkout, FilterParams, NewWorkout, TrendSummary, Workout, WorkoutFilter,
    WorkoutWithSets, top_set_trend,
};
use ironlog_storage::{StoreCounts, WorkoutStore};

use crate::ServiceError;

const WORKOUT: &str = "workout";

pub struct WorkoutService {
    store: Arc<dyn WorkoutStore>,
}

impl WorkoutService {
    #[must_use]
    pub fn new(store: Arc<dyn WorkoutStore>) -> Self {
        Self { store }
    }

    /// Validate and persist a workout with its sets. Nothing is written when
    /// validation fails.
    pub async fn create_workout(&self, req: CreateWorkout) -> Result<i64, ServiceError> {
        let workout = NewWorkout::try_from(req)?;
        let id = self.store.create_workout(&workout).await?;
        tracing::info!(id, exercise = workout.exercise(), date = workout.date(), "workout logged");
        Ok(id)
    }

    pub async fn list_workouts(
        &self,
        params: &FilterParams,
    ) -> Result<Vec<WorkoutWithSets>, ServiceError> {
        let filter = WorkoutFilter::try_from(params)?;
        Ok(self.store.list_workouts(&filter).await?)
    }

    pub async fn get_workout(&self, id: i64) -> Result<Workout, ServiceError> {
        self.store
            .get_workout(id)
            .await?
            .ok_or(ServiceError::NotFound { entity: WORKOUT, id })
    }

    pub async fn get_workout_with_sets(&self, id: i64) -> Result<WorkoutWithSets, ServiceError> {
        self.store
            .get_workout_with_sets(id)
            .await?
            .ok_or(ServiceError::NotFound { entity: WORKOUT, id })
    }

    /// Delete a workout and its sets. Ids below 1 are rejected as input
    /// errors; an id with no workout is `NotFound`.
    pub async fn delete_workout(&self, id: i64) -> Result<(), ServiceError> {
        if id < 1 {
            return Err(ServiceError::InvalidInput(format!("invalid id: {id}")));
        }
        match self.store.delete_workout(id).await? {
            0 => Err(ServiceError::NotFound { entity: WORKOUT, id }),
            _ => {
                tracing::info!(id, "workout deleted");
                Ok(())
            },
        }
    }

    pub async fn list_exercise_names(&self) -> Result<Vec<String>, ServiceError> {
        Ok(self.store.list_exercise_names().await?)
    }

    /// Per-day top set for the workouts matching `params`.
    pub async fn trend(&self, params: &FilterParams) -> Result<TrendSummary, ServiceError> {
        let workouts = self.list_workouts(params).await?;
        Ok(top_set_trend(&workouts))
    }

    pub async fn counts(&self) -> Result<StoreCounts, ServiceError> {
        Ok(self.store.counts().await?)
    }
}
