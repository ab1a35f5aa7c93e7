//! `SQLite` storage implementation.
//!
//! All methods are synchronous; async callers go through
//! [`crate::traits::WorkoutStore`], which moves them onto the blocking pool.

// SQLite uses i64 for counts, Rust uses usize/u64 - safe conversions within DB context
#![allow(
    clippy::as_conversions,
    clippy::cast_sign_loss,
    reason = "SQLite i64 <-> Rust u64 conversions are safe within DB row counts"
)]

mod stats;
mod workouts;

use std::path::Path;

use ironlog_core::{DB_BUSY_TIMEOUT_MS, DB_POOL_SIZE_ENV, DEFAULT_DB_POOL_SIZE, env_parse_with_default};
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;

use crate::error::StorageError;
use crate::migrations;

pub use stats::StoreCounts;

/// Type alias for pooled connection
pub(crate) type PooledConn = PooledConnection<SqliteConnectionManager>;

/// Workout repository wrapping a `SQLite` connection pool.
///
/// Cheap to clone; clones share the pool.
#[derive(Clone, Debug)]
pub struct Storage {
    pub(crate) pool: Pool<SqliteConnectionManager>,
}

/// Get a connection from the pool
pub(crate) fn get_conn(pool: &Pool<SqliteConnectionManager>) -> Result<PooledConn, StorageError> {
    Ok(pool.get()?)
}

/// Per-connection settings. `foreign_keys` is off by default in SQLite and
/// is what makes the `ON DELETE CASCADE` on `workout_sets` effective.
fn init_connection(conn: &mut Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(&format!(
        "PRAGMA foreign_keys = ON;
         PRAGMA busy_timeout = {DB_BUSY_TIMEOUT_MS};
         PRAGMA journal_mode = WAL;
         PRAGMA synchronous = NORMAL;"
    ))?;
    Ok(())
}

fn db_pool_size() -> u32 {
    env_parse_with_default(DB_POOL_SIZE_ENV, DEFAULT_DB_POOL_SIZE).max(1)
}

impl Storage {
    /// Open (creating if needed) the database at `db_path` with a pool sized
    /// from `IRONLOG_DB_POOL_SIZE`, and run migrations.
    ///
    /// # Errors
    /// Returns error if the pool cannot be built or migrations fail.
    pub fn new(db_path: &Path) -> Result<Self, StorageError> {
        Self::with_pool_size(db_path, db_pool_size())
    }

    /// Same as [`Storage::new`] with an explicit pool size.
    ///
    /// # Errors
    /// Returns error if the pool cannot be built or migrations fail.
    pub fn with_pool_size(db_path: &Path, pool_size: u32) -> Result<Self, StorageError> {
        let manager = SqliteConnectionManager::file(db_path).with_init(init_connection);
        let pool = Pool::builder().max_size(pool_size).build(manager)?;

        let conn = pool.get()?;
        migrations::run_migrations(&conn).map_err(|e| StorageError::Migration(e.to_string()))?;
        drop(conn);

        tracing::info!(
            path = %db_path.display(),
            pool_size = pool_size,
            "Storage initialized with connection pool"
        );

        Ok(Self { pool })
    }
}
