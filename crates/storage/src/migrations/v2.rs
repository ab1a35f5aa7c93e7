//! Migration v2: one row per (workout, set position)

pub(super) const SQL: &str = "
CREATE UNIQUE INDEX IF NOT EXISTS idx_sets_workout_position
    ON workout_sets(workout_id, set_index);
";
