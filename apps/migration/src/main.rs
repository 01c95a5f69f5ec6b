//! Schema migration CLI for the posts database.
//!
//! Reads `DATABASE_URL` and accepts the usual `up`, `down`, `status`,
//! `fresh`, `refresh` and `reset` subcommands.

use sea_orm_migration::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    cli::run_cli(socialplan_migration::Migrator).await;
}
