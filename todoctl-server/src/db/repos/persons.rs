//! Person repository
//!
//! Handles person CRUD with:
//! - Department existence check and insert in one transaction
//! - UNIQUE(email) violations surfaced as `DbError::Duplicate`

use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

use super::{begin_write, DbError};
use crate::models::{Email, PersonName};

/// Person record from database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub department_id: Option<i64>,
}

const RESOURCE: &str = "Person";

/// Person repository
pub struct PersonRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> PersonRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a person, verifying the department first (atomic).
    ///
    /// Returns [`DbError::MissingReference`] if `department_id` names no
    /// department and [`DbError::Duplicate`] if the email is taken. Nothing
    /// is written in either case.
    pub async fn create(
        &self,
        name: PersonName,
        email: Email,
        department_id: Option<i64>,
    ) -> Result<Person, DbError> {
        let mut tx = begin_write(self.pool).await?;

        if let Some(department_id) = department_id {
            let (exists,): (bool,) =
                sqlx::query_as("SELECT EXISTS(SELECT 1 FROM department WHERE id = ?)")
                    .bind(department_id)
                    .fetch_one(&mut *tx)
                    .await?;

            if !exists {
                return Err(DbError::MissingReference {
                    resource: "Department",
                    id: department_id.to_string(),
                });
            }
        }

        let person: Person = sqlx::query_as(
            r#"
            INSERT INTO person (name, email, department_id)
            VALUES (?, ?, ?)
            RETURNING id, name, email, department_id
            "#,
        )
        .bind(name.as_str())
        .bind(email.as_str())
        .bind(department_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| DbError::from_write(e, RESOURCE, email.as_str()))?;

        tx.commit().await?;
        tracing::debug!(id = person.id, "person created");
        Ok(person)
    }

    /// Get a single person by id.
    pub async fn get(&self, id: i64) -> Result<Person, DbError> {
        sqlx::query_as("SELECT id, name, email, department_id FROM person WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::not_found(RESOURCE, id))
    }

    /// Load a person, let `apply` modify it, and write it back.
    ///
    /// The department is not re-checked here; only the store's own
    /// foreign key enforcement applies.
    pub async fn update<F>(&self, id: i64, apply: F) -> Result<Person, DbError>
    where
        F: FnOnce(&mut Person),
    {
        let mut tx = begin_write(self.pool).await?;

        let mut person: Person =
            sqlx::query_as("SELECT id, name, email, department_id FROM person WHERE id = ?")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or_else(|| DbError::not_found(RESOURCE, id))?;

        apply(&mut person);

        let person: Person = sqlx::query_as(
            r#"
            UPDATE person
            SET name = ?, email = ?, department_id = ?
            WHERE id = ?
            RETURNING id, name, email, department_id
            "#,
        )
        .bind(&person.name)
        .bind(&person.email)
        .bind(person.department_id)
        .bind(id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| DbError::from_write(e, RESOURCE, &person.email))?;

        tx.commit().await?;
        tracing::debug!(id, "person updated");
        Ok(person)
    }

    /// Count people, for checks that a failed write stored nothing.
    pub async fn count(&self) -> Result<i64, DbError> {
        let count = sqlx::query_scalar("SELECT COUNT(*) FROM person")
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }
}
