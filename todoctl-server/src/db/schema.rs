//! Table creation run at startup
//!
//! Every statement is `CREATE TABLE IF NOT EXISTS`, so running this against
//! an existing database is a no-op.

use sqlx::SqlitePool;

/// Create all tables that don't exist yet
pub async fn run(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    tracing::info!("Creating tables...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS todo (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title VARCHAR(255) NOT NULL,
            description VARCHAR(1024) NOT NULL,
            completed BOOLEAN NOT NULL DEFAULT 0,
            created_at TIMESTAMP NOT NULL,
            completed_on TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS department (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS person (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            department_id INTEGER REFERENCES department(id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Many-to-many link between todos and people; nothing writes it yet
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS todo_person (
            todo_id INTEGER NOT NULL REFERENCES todo(id),
            person_id INTEGER NOT NULL REFERENCES person(id),
            PRIMARY KEY (todo_id, person_id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_person_department ON person(department_id)")
        .execute(pool)
        .await?;

    tracing::info!("Tables ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_memory_pool;

    async fn table_names(pool: &SqlitePool) -> Vec<String> {
        sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
        )
        .fetch_all(pool)
        .await
        .expect("list tables")
    }

    #[tokio::test]
    async fn creates_all_tables() {
        let pool = create_memory_pool().await.unwrap();
        run(&pool).await.unwrap();

        assert_eq!(
            table_names(&pool).await,
            vec!["department", "person", "todo", "todo_person"]
        );
    }

    #[tokio::test]
    async fn rerun_is_noop() {
        let pool = create_memory_pool().await.unwrap();
        run(&pool).await.unwrap();
        sqlx::query("INSERT INTO department (name) VALUES ('Physics')")
            .execute(&pool)
            .await
            .unwrap();

        run(&pool).await.unwrap();

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM department")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn association_key_is_composite() {
        let pool = create_memory_pool().await.unwrap();
        run(&pool).await.unwrap();

        sqlx::query(
            "INSERT INTO todo (title, description, created_at) VALUES ('t', 'd', '2024-01-01T00:00:00Z')",
        )
        .execute(&pool)
        .await
        .unwrap();
        sqlx::query("INSERT INTO person (name, email) VALUES ('Ada', 'ada@example.com')")
            .execute(&pool)
            .await
            .unwrap();

        sqlx::query("INSERT INTO todo_person (todo_id, person_id) VALUES (1, 1)")
            .execute(&pool)
            .await
            .unwrap();
        let dup = sqlx::query("INSERT INTO todo_person (todo_id, person_id) VALUES (1, 1)")
            .execute(&pool)
            .await
            .unwrap_err();
        assert!(dup.as_database_error().unwrap().is_unique_violation());

        let dangling = sqlx::query("INSERT INTO todo_person (todo_id, person_id) VALUES (1, 42)")
            .execute(&pool)
            .await
            .unwrap_err();
        assert!(dangling.as_database_error().unwrap().is_foreign_key_violation());
    }
}
