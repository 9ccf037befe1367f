//! todoctl-server: CRUD HTTP API for todos, departments and people
//!
//! Backed by a single SQLite database whose tables are created on startup.
//! Layers, bottom up: [`models`] validates input, [`db`] owns the pool and
//! the SQL, [`http`] maps requests and errors.

pub mod db;
pub mod http;
pub mod models;

pub use db::{create_memory_pool, create_pool, DbError};
pub use http::{build_router, run_server, ApiError, ServerConfig};
