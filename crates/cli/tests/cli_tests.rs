#![expect(clippy::unwrap_used, reason = "test code")]

use assert_cmd::Command;
use ironlog_core::{NewSet, NewWorkout};
use ironlog_storage::Storage;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn ironlog(db: &Path) -> Command {
    let mut cmd = Command::cargo_bin("ironlog").unwrap();
    cmd.env_remove("IRONLOG_DB").arg("--db").arg(db);
    cmd
}

/// Database with two squat sessions and one bench session.
fn seeded_db() -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db = temp_dir.path().join("log.db");
    let storage = Storage::new(&db).unwrap();
    let seed = [
        ("2024-01-01", "Squat", vec![(100.0, 5), (110.0, 3)]),
        ("2024-01-08", "Squat", vec![(112.5, 3)]),
        ("2024-01-08", "Bench Press", vec![(80.0, 5)]),
    ];
    for (date, exercise, sets) in seed {
        let sets = sets.into_iter().map(|(weight, reps)| NewSet { weight, reps }).collect();
        storage.create_workout(&NewWorkout::new(date, exercise, None, sets).unwrap()).unwrap();
    }
    (db, temp_dir)
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("ironlog").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Personal workout log"));
}

#[test]
fn test_cli_serve_help() {
    let mut cmd = Command::cargo_bin("ironlog").unwrap();
    cmd.arg("serve").arg("--help").assert().success().stdout(predicate::str::contains("port"));
}

#[test]
fn test_stats_on_fresh_db_creates_it() {
    let temp_dir = TempDir::new().unwrap();
    let db = temp_dir.path().join("nested").join("log.db");
    ironlog(&db)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"workouts\": 0"))
        .stdout(predicate::str::contains("\"sets\": 0"));
    assert!(db.exists());
}

#[test]
fn test_list_filters_by_exercise() {
    let (db, _dir) = seeded_db();
    ironlog(&db)
        .args(["list", "--exercise", "Bench"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bench Press"))
        .stdout(predicate::str::contains("Squat").not());
}

#[test]
fn test_list_rejects_bad_date() {
    let (db, _dir) = seeded_db();
    ironlog(&db)
        .args(["list", "--from", "January"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("YYYY-MM-DD"));
}

#[test]
fn test_exercises_most_used_first() {
    let (db, _dir) = seeded_db();
    ironlog(&db)
        .arg("exercises")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r#"(?s)"Squat".*"Bench Press""#).unwrap());
}

#[test]
fn test_trend_reports_top_sets() {
    let (db, _dir) = seeded_db();
    ironlog(&db)
        .args(["trend", "--exercise", "Squat"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total_sessions\": 2"))
        .stdout(predicate::str::contains("\"max_top_weight\": 112.5"));
}

#[test]
fn test_get_and_delete() {
    let (db, _dir) = seeded_db();
    ironlog(&db)
        .args(["get", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"set_index\": 2"));

    ironlog(&db).args(["delete", "1"]).assert().success().stdout(predicate::str::contains("\"ok\": true"));

    ironlog(&db).args(["get", "1"]).assert().failure().stderr(predicate::str::contains("not found"));
    ironlog(&db).args(["delete", "1"]).assert().failure().stderr(predicate::str::contains("not found"));
    ironlog(&db)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"workouts\": 2"))
        .stdout(predicate::str::contains("\"sets\": 2"));
}

#[test]
fn test_delete_rejects_zero_id() {
    let (db, _dir) = seeded_db();
    ironlog(&db).args(["delete", "0"]).assert().failure().stderr(predicate::str::contains("invalid"));
}
