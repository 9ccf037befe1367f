//! Department repository
//!
//! Handles department CRUD:
//! - create: INSERT, UNIQUE(name) violations become `DbError::Duplicate`
//! - list: LIMIT/OFFSET page ordered by id

use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

use super::{begin_write, DbError};
use crate::models::{DepartmentName, Pagination};

/// Department record from database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Department {
    pub id: i64,
    pub name: String,
}

const RESOURCE: &str = "Department";

/// Department repository
pub struct DepartmentRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> DepartmentRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a department.
    ///
    /// Fails with [`DbError::Duplicate`] when the name is taken; the
    /// transaction is rolled back before returning.
    pub async fn create(&self, name: DepartmentName) -> Result<Department, DbError> {
        let mut tx = begin_write(self.pool).await?;

        let department: Department = sqlx::query_as(
            "INSERT INTO department (name) VALUES (?) RETURNING id, name",
        )
        .bind(name.as_str())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| DbError::from_write(e, RESOURCE, name.as_str()))?;

        tx.commit().await?;
        tracing::debug!(id = department.id, name = %department.name, "department created");
        Ok(department)
    }

    /// Get a single department by id.
    pub async fn get(&self, id: i64) -> Result<Department, DbError> {
        sqlx::query_as("SELECT id, name FROM department WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::not_found(RESOURCE, id))
    }

    /// Load a department, let `apply` modify it, and write it back.
    pub async fn update<F>(&self, id: i64, apply: F) -> Result<Department, DbError>
    where
        F: FnOnce(&mut Department),
    {
        let mut tx = begin_write(self.pool).await?;

        let mut department: Department = sqlx::query_as("SELECT id, name FROM department WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| DbError::not_found(RESOURCE, id))?;

        apply(&mut department);

        let department: Department =
            sqlx::query_as("UPDATE department SET name = ? WHERE id = ? RETURNING id, name")
                .bind(&department.name)
                .bind(id)
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| DbError::from_write(e, RESOURCE, &department.name))?;

        tx.commit().await?;
        tracing::debug!(id, "department updated");
        Ok(department)
    }

    /// List one page of departments in id order.
    pub async fn list(&self, page: Pagination) -> Result<Vec<Department>, DbError> {
        let departments = sqlx::query_as(
            r#"
            SELECT id, name
            FROM department
            ORDER BY id
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(self.pool)
        .await?;

        Ok(departments)
    }
}
