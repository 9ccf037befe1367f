//! Command implementations for todoctl CLI

pub mod init_db;
pub mod serve;

use clap::Args;

// Re-export main dispatcher functions for flat access from main.rs
pub use init_db::run_init_db;
pub use serve::run_serve;

/// Default database when neither flag nor environment sets one
pub const DEFAULT_DATABASE_URL: &str = "sqlite://database.db";

/// Database selection shared by commands
#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// SQLite database URL; the file is created if missing
    #[arg(long, env = "TODOCTL_DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,
}
