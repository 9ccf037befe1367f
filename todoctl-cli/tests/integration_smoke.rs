//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("todoctl").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Address to bind to"))
        .stdout(predicate::str::contains("--database-url"));
}

#[test]
fn test_init_db_help() {
    let mut cmd = Command::cargo_bin("todoctl").unwrap();
    cmd.arg("init-db").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("SQLite database URL"));
}

#[test]
fn test_init_db_creates_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("todos.db");

    let mut cmd = Command::cargo_bin("todoctl").unwrap();
    cmd.current_dir(dir.path())
        .arg("init-db")
        .arg("--database-url")
        .arg(format!("sqlite://{}", path.display()));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Database ready"));
    assert!(path.exists());
}

#[test]
fn test_init_db_reads_env() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("from-env.db");

    let mut cmd = Command::cargo_bin("todoctl").unwrap();
    cmd.current_dir(dir.path())
        .env("TODOCTL_DATABASE_URL", format!("sqlite://{}", path.display()))
        .arg("init-db");

    cmd.assert().success();
    assert!(path.exists());
}

#[test]
fn test_unknown_command_fails() {
    let mut cmd = Command::cargo_bin("todoctl").unwrap();
    cmd.arg("frobnicate");

    cmd.assert().failure();
}
