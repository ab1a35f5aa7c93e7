use ironlog_core::{NewWorkout, Workout, WorkoutFilter, WorkoutSet, WorkoutWithSets};
use rusqlite::{OptionalExtension, TransactionBehavior, params, params_from_iter};

use super::{Storage, get_conn};
use crate::error::StorageError;

const WORKOUT_COLUMNS: &str = "id, date, exercise, notes, created_at";

const SETS_FOR_WORKOUT: &str = "SELECT id, workout_id, set_index, weight, reps
     FROM workout_sets
     WHERE workout_id = ?1
     ORDER BY set_index ASC";

impl Storage {
    /// Insert a workout and all its sets in one transaction.
    ///
    /// Sets are stored in the order given, `set_index` starting at 1.
    /// Any failure rolls back every row of the call.
    ///
    /// # Errors
    /// Returns error if any insert fails.
    pub fn create_workout(&self, workout: &NewWorkout) -> Result<i64, StorageError> {
        let mut conn = get_conn(&self.pool)?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        tx.execute(
            "INSERT INTO workouts (date, exercise, notes) VALUES (?1, ?2, ?3)",
            params![workout.date(), workout.exercise(), workout.notes()],
        )?;
        let workout_id = tx.last_insert_rowid();

        {
            let mut insert_set = tx.prepare_cached(
                "INSERT INTO workout_sets (workout_id, set_index, weight, reps)
                 VALUES (?1, ?2, ?3, ?4)",
            )?;
            for (set_index, set) in (1_i64..).zip(workout.sets()) {
                insert_set.execute(params![workout_id, set_index, set.weight, set.reps])?;
            }
        }

        tx.commit()?;
        tracing::debug!(
            workout_id,
            exercise = workout.exercise(),
            sets = workout.sets().len(),
            "workout created"
        );
        Ok(workout_id)
    }

    /// List workouts matching `filter`, newest first (`date DESC, id DESC`),
    /// each with its sets ordered by `set_index`.
    ///
    /// Sets are loaded with one query per workout inside the same read
    /// transaction as the workout query.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn list_workouts(&self, filter: &WorkoutFilter) -> Result<Vec<WorkoutWithSets>, StorageError> {
        let mut clauses: Vec<&str> = Vec::new();
        let mut args: Vec<&str> = Vec::new();
        if let Some(exercise) = filter.exercise() {
            // instr() is case-sensitive and needs no LIKE escaping
            clauses.push("instr(exercise, ?) > 0");
            args.push(exercise);
        }
        if let Some(from) = filter.from() {
            clauses.push("date >= ?");
            args.push(from);
        }
        if let Some(to) = filter.to() {
            clauses.push("date <= ?");
            args.push(to);
        }
        let where_sql = if clauses.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", clauses.join(" AND "))
        };
        let sql = format!(
            "SELECT {WORKOUT_COLUMNS} FROM workouts {where_sql} ORDER BY date DESC, id DESC"
        );

        let mut conn = get_conn(&self.pool)?;
        let tx = conn.transaction()?;
        let result = {
            let mut stmt = tx.prepare(&sql)?;
            let workouts = stmt
                .query_map(params_from_iter(args), Self::row_to_workout)?
                .collect::<rusqlite::Result<Vec<_>>>()?;

            let mut sets_stmt = tx.prepare_cached(SETS_FOR_WORKOUT)?;
            let mut result = Vec::with_capacity(workouts.len());
            for workout in workouts {
                let sets = sets_stmt
                    .query_map(params![workout.id], Self::row_to_set)?
                    .collect::<rusqlite::Result<Vec<_>>>()?;
                result.push(WorkoutWithSets { workout, sets });
            }
            result
        };
        tx.commit()?;
        Ok(result)
    }

    /// Get a single workout row, without sets.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn get_workout(&self, id: i64) -> Result<Option<Workout>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let workout = conn
            .query_row(
                &format!("SELECT {WORKOUT_COLUMNS} FROM workouts WHERE id = ?1"),
                params![id],
                Self::row_to_workout,
            )
            .optional()?;
        Ok(workout)
    }

    /// Get a workout together with its sets.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn get_workout_with_sets(&self, id: i64) -> Result<Option<WorkoutWithSets>, StorageError> {
        let mut conn = get_conn(&self.pool)?;
        let tx = conn.transaction()?;
        let found = {
            let workout = tx
                .query_row(
                    &format!("SELECT {WORKOUT_COLUMNS} FROM workouts WHERE id = ?1"),
                    params![id],
                    Self::row_to_workout,
                )
                .optional()?;
            match workout {
                Some(workout) => {
                    let mut stmt = tx.prepare_cached(SETS_FOR_WORKOUT)?;
                    let sets = stmt
                        .query_map(params![id], Self::row_to_set)?
                        .collect::<rusqlite::Result<Vec<_>>>()?;
                    Some(WorkoutWithSets { workout, sets })
                },
                None => None,
            }
        };
        tx.commit()?;
        Ok(found)
    }

    /// Delete a workout and its sets in one transaction.
    ///
    /// Sets are deleted explicitly before the workout, so the result does not
    /// depend on the foreign-key cascade being active. Returns the number of
    /// workout rows removed (0 or 1).
    ///
    /// # Errors
    /// Returns error if database delete fails.
    pub fn delete_workout(&self, id: i64) -> Result<usize, StorageError> {
        let mut conn = get_conn(&self.pool)?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
        let sets_deleted = tx.execute("DELETE FROM workout_sets WHERE workout_id = ?1", params![id])?;
        let deleted = tx.execute("DELETE FROM workouts WHERE id = ?1", params![id])?;
        tx.commit()?;
        tracing::debug!(workout_id = id, deleted, sets_deleted, "workout delete");
        Ok(deleted)
    }

    /// Distinct exercise names, most used first, ties alphabetical.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn list_exercise_names(&self) -> Result<Vec<String>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(
            "SELECT exercise
             FROM workouts
             GROUP BY exercise
             ORDER BY COUNT(*) DESC, exercise ASC",
        )?;
        let names = stmt.query_map([], |row| row.get(0))?.collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(names)
    }

    fn row_to_workout(row: &rusqlite::Row<'_>) -> rusqlite::Result<Workout> {
        Ok(Workout {
            id: row.get(0)?,
            date: row.get(1)?,
            exercise: row.get(2)?,
            notes: row.get(3)?,
            created_at: row.get(4)?,
        })
    }

    fn row_to_set(row: &rusqlite::Row<'_>) -> rusqlite::Result<WorkoutSet> {
        Ok(WorkoutSet {
            id: row.get(0)?,
            workout_id: row.get(1)?,
            set_index: row.get(2)?,
            weight: row.get(3)?,
            reps: row.get(4)?,
        })
    }
}
