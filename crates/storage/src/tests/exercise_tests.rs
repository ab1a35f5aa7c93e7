#![expect(clippy::unwrap_used, reason = "test code")]

use super::{create_test_storage, new_workout};

#[test]
fn test_exercise_names_empty_store() {
    let (storage, _temp_dir) = create_test_storage();
    assert!(storage.list_exercise_names().unwrap().is_empty());
}

#[test]
fn test_exercise_names_ordered_by_frequency() {
    let (storage, _temp_dir) = create_test_storage();
    for day in 1..=3 {
        storage.create_workout(&new_workout(&format!("2024-01-0{day}"), "Squat", &[(100.0, 5)])).unwrap();
    }
    storage.create_workout(&new_workout("2024-01-04", "Bench", &[(60.0, 5)])).unwrap();
    assert_eq!(storage.list_exercise_names().unwrap(), vec!["Squat", "Bench"]);
}

#[test]
fn test_exercise_names_ties_break_alphabetically() {
    let (storage, _temp_dir) = create_test_storage();
    for exercise in ["Row", "Deadlift", "Press", "Row", "Deadlift"] {
        storage.create_workout(&new_workout("2024-01-01", exercise, &[(40.0, 8)])).unwrap();
    }
    assert_eq!(storage.list_exercise_names().unwrap(), vec!["Deadlift", "Row", "Press"]);
}

#[test]
fn test_exercise_names_drop_deleted_workouts() {
    let (storage, _temp_dir) = create_test_storage();
    let id = storage.create_workout(&new_workout("2024-01-01", "Curl", &[(15.0, 12)])).unwrap();
    storage.create_workout(&new_workout("2024-01-02", "Squat", &[(100.0, 5)])).unwrap();
    storage.delete_workout(id).unwrap();
    assert_eq!(storage.list_exercise_names().unwrap(), vec!["Squat"]);
}
