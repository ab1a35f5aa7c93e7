#![allow(
    clippy::redundant_pub_crate,
    reason = "migrations module is private, pub(crate) is intentional"
)]

mod v1;
mod v2;

use rusqlite::Connection;

pub(crate) const SCHEMA_VERSION: i32 = 2;

/// Bring the schema up to [`SCHEMA_VERSION`]. Safe to run on every start:
/// applied steps are skipped via `PRAGMA user_version` and every statement
/// is `IF NOT EXISTS`.
pub(crate) fn run_migrations(conn: &Connection) -> Result<(), rusqlite::Error> {
    let current_version: i32 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;

    tracing::info!("Database schema version: {} (target: {})", current_version, SCHEMA_VERSION);

    if current_version < 1i32 {
        tracing::info!("Running migration v1: workouts and workout_sets");
        conn.execute_batch(v1::SQL)?;
    }

    if current_version < 2i32 {
        tracing::info!("Running migration v2: unique set position per workout");
        conn.execute_batch(v2::SQL)?;
    }

    if current_version < SCHEMA_VERSION {
        conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
    }
    tracing::info!("Database schema up to date (version {})", SCHEMA_VERSION);

    Ok(())
}
