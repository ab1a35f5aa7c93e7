use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};
use std::sync::Arc;

use ironlog_core::{CreateWorkout, FilterParams, TrendSummary, Workout, parse_id};

use crate::AppState;
use crate::api_error::ApiError;
use crate::query_types::DeleteQuery;
use crate::response_types::{CreateWorkoutResponse, OkResponse, WorkoutListResponse};

pub async fn create_workout(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CreateWorkout>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateWorkoutResponse>), ApiError> {
    let Json(req) = body?;
    let id = state.workout_service.create_workout(req).await?;
    Ok((StatusCode::CREATED, Json(CreateWorkoutResponse { ok: true, id })))
}

pub async fn list_workouts(
    State(state): State<Arc<AppState>>,
    query: Result<Query<FilterParams>, QueryRejection>,
) -> Result<Json<WorkoutListResponse>, ApiError> {
    let Query(params) = query?;
    let workouts = state.workout_service.list_workouts(&params).await?;
    Ok(Json(WorkoutListResponse { workouts }))
}

pub async fn get_workout(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Workout>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(state.workout_service.get_workout(id).await?))
}

pub async fn delete_workout(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<OkResponse>, ApiError> {
    let id = parse_id(&id)?;
    state.workout_service.delete_workout(id).await?;
    Ok(Json(OkResponse { ok: true }))
}

/// `DELETE /workouts?id=`, same contract as the path form.
pub async fn delete_workout_by_query(
    State(state): State<Arc<AppState>>,
    query: Result<Query<DeleteQuery>, QueryRejection>,
) -> Result<Json<OkResponse>, ApiError> {
    let Query(DeleteQuery { id }) = query?;
    let id = id.as_deref().map(str::trim).filter(|s| !s.is_empty());
    let Some(id) = id else {
        return Err(ApiError::BadRequest("id is required".to_owned()));
    };
    let id = parse_id(id)?;
    state.workout_service.delete_workout(id).await?;
    Ok(Json(OkResponse { ok: true }))
}

pub async fn trend(
    State(state): State<Arc<AppState>>,
    query: Result<Query<FilterParams>, QueryRejection>,
) -> Result<Json<TrendSummary>, ApiError> {
    let Query(params) = query?;
    Ok(Json(state.workout_service.trend(&params).await?))
}
