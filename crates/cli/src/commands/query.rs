use anyhow::Result;
use ironlog_core::FilterParams;
use ironlog_service::WorkoutService;
use serde::Serialize;
use serde_json::json;

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(crate) async fn run_list(service: &WorkoutService, filter: FilterParams) -> Result<()> {
    let workouts = service.list_workouts(&filter).await?;
    print_json(&json!({ "workouts": workouts }))
}

pub(crate) async fn run_get(service: &WorkoutService, id: i64) -> Result<()> {
    print_json(&service.get_workout_with_sets(id).await?)
}

pub(crate) async fn run_delete(service: &WorkoutService, id: i64) -> Result<()> {
    service.delete_workout(id).await?;
    print_json(&json!({ "ok": true }))
}

pub(crate) async fn run_exercises(service: &WorkoutService) -> Result<()> {
    let exercises = service.list_exercise_names().await?;
    print_json(&json!({ "exercises": exercises }))
}

pub(crate) async fn run_trend(service: &WorkoutService, filter: FilterParams) -> Result<()> {
    print_json(&service.trend(&filter).await?)
}

pub(crate) async fn run_stats(service: &WorkoutService) -> Result<()> {
    print_json(&service.counts().await?)
}
