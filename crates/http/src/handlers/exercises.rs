use axum::{Json, extract::State};
use std::sync::Arc;

use crate::AppState;
use crate::api_error::ApiError;
use crate::response_types::ExerciseListResponse;

pub async fn list_exercises(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ExerciseListResponse>, ApiError> {
    let exercises = state.workout_service.list_exercise_names().await?;
    Ok(Json(ExerciseListResponse { exercises }))
}
