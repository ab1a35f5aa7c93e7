//! Shared constants for ironlog.

/// Format of every stored and accepted workout date.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Default SQLite connection pool size.
pub const DEFAULT_DB_POOL_SIZE: u32 = 8;

/// Environment variable overriding the pool size.
pub const DB_POOL_SIZE_ENV: &str = "IRONLOG_DB_POOL_SIZE";

/// SQLite busy timeout applied to every pooled connection.
pub const DB_BUSY_TIMEOUT_MS: u32 = 5000;

/// Directory under the platform data dir holding the database.
pub const DATA_DIR_NAME: &str = "ironlog";

/// Database file name inside [`DATA_DIR_NAME`].
pub const DB_FILE_NAME: &str = "ironlog.db";
