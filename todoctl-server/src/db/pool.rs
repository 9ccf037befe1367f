//! Database connection pool management
//!
//! Every repository call borrows one connection from the pool and hands it
//! back when the call returns, on success and on error alike. That borrow is
//! the per-request session.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};

/// Default maximum connections for the pool.
/// Kept low: SQLite serialises writers anyway.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// How long a connection waits on a locked database before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Create a SQLite connection pool, creating the database file if missing.
///
/// # Arguments
///
/// * `database_url` - SQLite connection string, e.g. `sqlite://database.db`
///
/// # Errors
///
/// Returns an error if the URL is malformed or the file cannot be opened.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("sqlite://database.db").await?;
/// ```
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(BUSY_TIMEOUT)
        .foreign_keys(true);

    tracing::debug!(
        database_url,
        max_connections = DEFAULT_MAX_CONNECTIONS,
        "opening sqlite pool"
    );

    SqlitePoolOptions::new()
        .max_connections(DEFAULT_MAX_CONNECTIONS)
        .connect_with(options)
        .await
}

/// Create a pool over a private in-memory database.
///
/// The pool holds exactly one connection that never expires, since an
/// in-memory database lives only as long as its connection.
pub async fn create_memory_pool() -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
}
