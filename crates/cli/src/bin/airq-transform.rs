//! airq-transform — rebuild presentation tables from the raw data.
//!
//! Runs every SQL script under the query directory, in path order,
//! fail-fast. Scripts use CREATE OR REPLACE so the phase is safely
//! re-runnable.

use std::path::PathBuf;

use clap::Parser;
use tracing::info;

/// Run the transformation scripts against the database.
#[derive(Parser, Debug)]
#[command(name = "airq-transform", version, about)]
struct Cli {
    /// Path to the database file.
    #[arg(long, env = "AIRQ_DATABASE_PATH")]
    database_path: PathBuf,

    /// Directory containing the transformation scripts.
    #[arg(long, env = "AIRQ_QUERY_DIR")]
    query_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let summary = airq_pipeline::ops::transform(&cli.database_path, &cli.query_dir)?;
    info!(executed = summary.executed, "transformation complete");
    Ok(())
}
