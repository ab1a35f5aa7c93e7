//! Top-set trend: the heaviest set logged on each day.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::workout::WorkoutWithSets;

/// Heaviest weight lifted on one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: String,
    pub top_weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSummary {
    /// One point per distinct date, oldest first
    pub trend: Vec<TrendPoint>,
    /// Number of workouts the trend was built from
    pub total_sessions: usize,
    /// Heaviest top set across all sessions, `0.0` when empty
    pub max_top_weight: f64,
}

/// Collapse workouts into one point per date, keeping the day's top set.
///
/// Dates are `YYYY-MM-DD`, so lexical order is chronological.
pub fn top_set_trend(workouts: &[WorkoutWithSets]) -> TrendSummary {
    let mut by_date: BTreeMap<&str, f64> = BTreeMap::new();
    for w in workouts {
        let top = w.top_weight();
        by_date
            .entry(w.workout.date.as_str())
            .and_modify(|cur| *cur = cur.max(top))
            .or_insert(top);
    }

    let max_top_weight = by_date.values().copied().fold(0.0, f64::max);
    TrendSummary {
        trend: by_date
            .into_iter()
            .map(|(date, top_weight)| TrendPoint { date: date.to_owned(), top_weight })
            .collect(),
        total_sessions: workouts.len(),
        max_top_weight,
    }
}
