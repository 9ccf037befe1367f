//! Todo repository
//!
//! - create: single INSERT ... RETURNING
//! - update: read-modify-write inside one transaction

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

use super::{begin_write, DbError};
use crate::models::{TodoDescription, TodoTitle};

/// Todo record from database
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub completed_on: Option<DateTime<Utc>>,
}

/// Column values for a todo that doesn't exist yet
#[derive(Debug, Clone)]
pub struct TodoDraft {
    pub title: TodoTitle,
    pub description: TodoDescription,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub completed_on: Option<DateTime<Utc>>,
}

impl TodoDraft {
    /// Draft with defaults: not completed, created now.
    pub fn new(title: TodoTitle, description: TodoDescription) -> Self {
        Self {
            title,
            description,
            completed: false,
            created_at: Utc::now(),
            completed_on: None,
        }
    }
}

const RESOURCE: &str = "Todo";

/// Todo repository
pub struct TodoRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> TodoRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a todo and return it with its generated id.
    pub async fn create(&self, draft: TodoDraft) -> Result<Todo, DbError> {
        let mut tx = begin_write(self.pool).await?;

        let todo: Todo = sqlx::query_as(
            r#"
            INSERT INTO todo (title, description, completed, created_at, completed_on)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, title, description, completed, created_at, completed_on
            "#,
        )
        .bind(draft.title.as_str())
        .bind(draft.description.as_str())
        .bind(draft.completed)
        .bind(draft.created_at)
        .bind(draft.completed_on)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        tracing::debug!(id = todo.id, "todo created");
        Ok(todo)
    }

    /// Get a single todo by id.
    pub async fn get(&self, id: i64) -> Result<Todo, DbError> {
        sqlx::query_as(
            r#"
            SELECT id, title, description, completed, created_at, completed_on
            FROM todo
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found(RESOURCE, id))
    }

    /// Load a todo, let `apply` modify it, and write every column back.
    ///
    /// The read and the write share one transaction.
    pub async fn update<F>(&self, id: i64, apply: F) -> Result<Todo, DbError>
    where
        F: FnOnce(&mut Todo),
    {
        let mut tx = begin_write(self.pool).await?;

        let mut todo: Todo = sqlx::query_as(
            r#"
            SELECT id, title, description, completed, created_at, completed_on
            FROM todo
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| DbError::not_found(RESOURCE, id))?;

        apply(&mut todo);

        let todo: Todo = sqlx::query_as(
            r#"
            UPDATE todo
            SET title = ?, description = ?, completed = ?, created_at = ?, completed_on = ?
            WHERE id = ?
            RETURNING id, title, description, completed, created_at, completed_on
            "#,
        )
        .bind(&todo.title)
        .bind(&todo.description)
        .bind(todo.completed)
        .bind(todo.created_at)
        .bind(todo.completed_on)
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        tracing::debug!(id, "todo updated");
        Ok(todo)
    }
}
