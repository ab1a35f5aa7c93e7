#![expect(clippy::unwrap_used, reason = "test code")]

use ironlog_core::WorkoutFilter;

use super::{create_test_storage, new_workout};
use crate::Storage;

fn seed(storage: &Storage) {
    for (date, exercise) in [
        ("2024-01-01", "Bench Press"),
        ("2024-01-03", "Squat"),
        ("2024-01-03", "Incline Bench"),
        ("2024-01-05", "bench dips"),
        ("2024-01-07", "Bench Press"),
    ] {
        storage.create_workout(&new_workout(date, exercise, &[(50.0, 5), (55.0, 5)])).unwrap();
    }
}

fn ids(storage: &Storage, filter: &WorkoutFilter) -> Vec<i64> {
    storage.list_workouts(filter).unwrap().iter().map(|w| w.workout.id).collect()
}

#[test]
fn test_list_orders_by_date_then_id_descending() {
    let (storage, _temp_dir) = create_test_storage();
    seed(&storage);
    assert_eq!(ids(&storage, &WorkoutFilter::default()), vec![5, 4, 3, 2, 1]);
}

#[test]
fn test_list_attaches_sets_in_order() {
    let (storage, _temp_dir) = create_test_storage();
    storage.create_workout(&new_workout("2024-01-01", "Squat", &[(120.0, 1), (100.0, 5), (80.0, 10)])).unwrap();
    let listed = storage.list_workouts(&WorkoutFilter::default()).unwrap();
    let indexes: Vec<i64> = listed[0].sets.iter().map(|s| s.set_index).collect();
    let weights: Vec<f64> = listed[0].sets.iter().map(|s| s.weight).collect();
    assert_eq!(indexes, vec![1, 2, 3]);
    assert_eq!(weights, vec![120.0, 100.0, 80.0]);
}

#[test]
fn test_exercise_filter_is_case_sensitive_substring() {
    let (storage, _temp_dir) = create_test_storage();
    seed(&storage);
    let filter = WorkoutFilter::new(Some("Bench"), None, None).unwrap();
    let listed = storage.list_workouts(&filter).unwrap();
    assert_eq!(listed.iter().map(|w| w.workout.id).collect::<Vec<_>>(), vec![5, 3, 1]);
    assert!(listed.iter().all(|w| w.workout.exercise.contains("Bench")));
}

#[test]
fn test_exercise_filter_treats_wildcards_literally() {
    let (storage, _temp_dir) = create_test_storage();
    seed(&storage);
    storage.create_workout(&new_workout("2024-01-08", "100% Squat", &[(60.0, 5)])).unwrap();
    let filter = WorkoutFilter::new(Some("%"), None, None).unwrap();
    assert_eq!(ids(&storage, &filter), vec![6]);
    let filter = WorkoutFilter::new(Some("_"), None, None).unwrap();
    assert!(ids(&storage, &filter).is_empty());
}

#[test]
fn test_date_bounds_are_inclusive() {
    let (storage, _temp_dir) = create_test_storage();
    seed(&storage);
    let filter = WorkoutFilter::new(None, Some("2024-01-03"), Some("2024-01-05")).unwrap();
    let listed = storage.list_workouts(&filter).unwrap();
    assert_eq!(listed.iter().map(|w| w.workout.id).collect::<Vec<_>>(), vec![4, 3, 2]);
    assert!(listed.iter().all(|w| ("2024-01-03"..="2024-01-05").contains(&w.workout.date.as_str())));
}

#[test]
fn test_single_bounds() {
    let (storage, _temp_dir) = create_test_storage();
    seed(&storage);
    let from = WorkoutFilter::new(None, Some("2024-01-05"), None).unwrap();
    assert_eq!(ids(&storage, &from), vec![5, 4]);
    let to = WorkoutFilter::new(None, None, Some("2024-01-01")).unwrap();
    assert_eq!(ids(&storage, &to), vec![1]);
}

#[test]
fn test_combined_filter_and_empty_result() {
    let (storage, _temp_dir) = create_test_storage();
    seed(&storage);
    let filter = WorkoutFilter::new(Some("Bench Press"), Some("2024-01-02"), None).unwrap();
    assert_eq!(ids(&storage, &filter), vec![5]);
    let none = WorkoutFilter::new(Some("Bench"), Some("2024-02-01"), None).unwrap();
    assert!(storage.list_workouts(&none).unwrap().is_empty());
}
