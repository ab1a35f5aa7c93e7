//! Response types (Serialize)

use serde::Serialize;

use ironlog_core::WorkoutWithSets;

#[derive(Debug, Serialize)]
pub struct CreateWorkoutResponse {
    pub ok: bool,
    pub id: i64,
}

#[derive(Debug, Serialize)]
pub struct OkResponse {
    pub ok: bool,
}

#[derive(Debug, Serialize)]
pub struct WorkoutListResponse {
    pub workouts: Vec<WorkoutWithSets>,
}

#[derive(Debug, Serialize)]
pub struct ExerciseListResponse {
    pub exercises: Vec<String>,
}

#[derive(Debug, Serialize)]
#[non_exhaustive]
pub struct VersionResponse {
    pub version: &'static str,
}
