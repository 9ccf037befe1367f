//! Database layer - connection pool, schema and repositories
//!
//! # Design Principles
//!
//! - Connection pool (max 5 connections) - no Arc<Mutex<Connection>>
//! - Rely on DB constraints, handle conflicts - no check-then-insert for uniqueness
//! - Transactions for every write

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::{create_memory_pool, create_pool};
pub use repos::*;
