use serde::Serialize;

use super::{Storage, get_conn};
use crate::error::StorageError;

/// Row counts of both tables, read in one statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StoreCounts {
    pub workouts: u64,
    pub sets: u64,
}

impl Storage {
    /// Count workouts and sets.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn counts(&self) -> Result<StoreCounts, StorageError> {
        let conn = get_conn(&self.pool)?;
        let (workouts, sets): (i64, i64) = conn.query_row(
            "SELECT (SELECT COUNT(*) FROM workouts), (SELECT COUNT(*) FROM workout_sets)",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;
        Ok(StoreCounts { workouts: workouts as u64, sets: sets as u64 })
    }
}
