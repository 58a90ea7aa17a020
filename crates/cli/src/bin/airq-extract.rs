//! airq-extract — load remote monthly partitions into the raw table.
//!
//! Expands every location in the locations file against the inclusive
//! month range, renders the extraction template once per partition, and
//! executes the result under the skip-and-log policy: a partition with no
//! remote data is logged and skipped, anything else is fatal.

use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use airq_core::partition::Month;
use airq_pipeline::ops::ExtractRequest;

/// Extract remote air-quality partitions into the database.
#[derive(Parser, Debug)]
#[command(name = "airq-extract", version, about)]
struct Cli {
    /// Path to the locations JSON file (keys are location IDs).
    #[arg(long, env = "AIRQ_LOCATIONS_FILE")]
    locations_file: PathBuf,

    /// Inclusive start month, YYYY-MM.
    #[arg(long, env = "AIRQ_START_MONTH")]
    start_month: Month,

    /// Inclusive end month, YYYY-MM.
    #[arg(long, env = "AIRQ_END_MONTH")]
    end_month: Month,

    /// Path to the SQL extraction template ({{ data_file_path }} placeholder).
    #[arg(long, env = "AIRQ_EXTRACT_TEMPLATE")]
    extract_template: PathBuf,

    /// Path to the database file.
    #[arg(long, env = "AIRQ_DATABASE_PATH")]
    database_path: PathBuf,

    /// Base path of the partition archive (filesystem path or s3:// URI).
    #[arg(long, env = "AIRQ_SOURCE_BASE_PATH")]
    source_base_path: String,
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

    let request = ExtractRequest {
        database_path: cli.database_path,
        locations_file: cli.locations_file,
        start_month: cli.start_month,
        end_month: cli.end_month,
        extract_template: cli.extract_template,
        source_base_path: cli.source_base_path,
    };

    let summary = airq_pipeline::ops::extract(&request)?;
    info!(
        executed = summary.executed,
        skipped = summary.skipped_count(),
        "extraction complete"
    );
    Ok(())
}
