//! airq-setup — create or destroy the analytical database.
//!
//! `--create` runs every DDL script under the DDL directory, in path
//! order, against a freshly created database file. `--destroy` deletes
//! the file. The two modes are mutually exclusive.

use std::path::PathBuf;

use clap::{ArgGroup, Parser};
use tracing::info;

/// Set up or tear down the air-quality database.
#[derive(Parser, Debug)]
#[command(name = "airq-setup", version, about)]
#[command(group(ArgGroup::new("mode").required(true)))]
struct Cli {
    /// Create the database and run all DDL scripts.
    #[arg(long, group = "mode")]
    create: bool,

    /// Delete the database file.
    #[arg(long, group = "mode")]
    destroy: bool,

    /// Path to the database file.
    #[arg(long, env = "AIRQ_DATABASE_PATH")]
    database_path: PathBuf,

    /// Directory containing the DDL scripts.
    #[arg(long, env = "AIRQ_DDL_DIR", required_if_eq("create", "true"))]
    ddl_dir: Option<PathBuf>,
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

    if cli.create {
        let ddl_dir = cli
            .ddl_dir
            .ok_or_else(|| anyhow::anyhow!("--ddl-dir is required with --create"))?;
        let summary = airq_pipeline::ops::setup_database(&cli.database_path, &ddl_dir)?;
        info!(executed = summary.executed, "database setup complete");
    } else {
        airq_pipeline::ops::destroy_database(&cli.database_path)?;
        info!(path = %cli.database_path.display(), "database destroyed");
    }

    Ok(())
}
