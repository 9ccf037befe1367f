//! Create the database file and its tables, then exit

use anyhow::{Context, Result};
use clap::Parser;

use todoctl_server::db::{create_pool, schema};

use super::DatabaseArgs;

#[derive(Parser, Debug)]
pub struct InitDbArgs {
    #[command(flatten)]
    pub database: DatabaseArgs,
}

pub async fn run_init_db(args: InitDbArgs) -> Result<()> {
    let database_url = args.database.database_url;

    let pool = create_pool(&database_url)
        .await
        .with_context(|| format!("Failed to open database {}", database_url))?;

    schema::run(&pool)
        .await
        .context("Failed to create tables")?;

    pool.close().await;
    println!("Database ready: {}", database_url);
    Ok(())
}
