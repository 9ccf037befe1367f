//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Borrows the pool, one connection per call
//! - Writes run in a `BEGIN IMMEDIATE` transaction; dropping it uncommitted
//!   rolls back
//! - Relies on UNIQUE / FOREIGN KEY constraints and translates violations

pub mod todos;
pub mod departments;
pub mod persons;

pub use todos::{Todo, TodoDraft, TodoRepo};
pub use departments::{Department, DepartmentRepo};
pub use persons::{Person, PersonRepo};

use sqlx::{Sqlite, SqlitePool, Transaction};

/// Begin a transaction that takes the write lock on its first statement.
///
/// A deferred transaction that reads first gets SQLITE_BUSY when it later
/// tries to write after another connection has committed, and the busy
/// timeout does not apply to that upgrade.
pub(crate) async fn begin_write(
    pool: &SqlitePool,
) -> Result<Transaction<'static, Sqlite>, sqlx::Error> {
    pool.begin_with("BEGIN IMMEDIATE").await
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    /// A referenced row was checked for and is missing
    #[error("missing reference: {resource} '{id}'")]
    MissingReference { resource: &'static str, id: String },

    /// UNIQUE constraint violation
    #[error("duplicate {resource}: '{value}'")]
    Duplicate { resource: &'static str, value: String },

    /// FOREIGN KEY constraint violation reported by the store
    #[error("invalid reference from {resource}")]
    InvalidReference { resource: &'static str },
}

impl DbError {
    /// Translate a failed write into a constraint-specific error.
    ///
    /// `value` is the unique column value being written, echoed back in
    /// [`DbError::Duplicate`].
    pub(crate) fn from_write(err: sqlx::Error, resource: &'static str, value: &str) -> Self {
        if let Some(db_err) = err.as_database_error() {
            if db_err.is_unique_violation() {
                return Self::Duplicate {
                    resource,
                    value: value.to_owned(),
                };
            }
            if db_err.is_foreign_key_violation() {
                return Self::InvalidReference { resource };
            }
        }
        Self::Sqlx(err)
    }

    pub(crate) fn not_found(resource: &'static str, id: i64) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }
}
