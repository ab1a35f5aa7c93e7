//! Persisted workout types.

use serde::{Deserialize, Serialize};

/// One logged training session, as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    /// Store-assigned identifier
    pub id: i64,
    /// Session date, `YYYY-MM-DD`
    pub date: String,
    /// Exercise label, trimmed and non-empty
    pub exercise: String,
    /// Free-form notes
    pub notes: Option<String>,
    /// Store-assigned insert timestamp (`YYYY-MM-DD HH:MM:SS`, UTC)
    pub created_at: String,
}

/// One weight x reps entry owned by a workout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSet {
    pub id: i64,
    pub workout_id: i64,
    /// 1-based position within the workout
    pub set_index: i64,
    pub weight: f64,
    pub reps: i64,
}

/// A workout with its sets attached, ordered by `set_index`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutWithSets {
    #[serde(flatten)]
    pub workout: Workout,
    pub sets: Vec<WorkoutSet>,
}

impl WorkoutWithSets {
    /// Heaviest weight across all sets, `0.0` when there are none.
    pub fn top_weight(&self) -> f64 {
        self.sets.iter().map(|s| s.weight).fold(0.0, f64::max)
    }
}
