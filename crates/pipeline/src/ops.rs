//! The three pipeline phases: setup/teardown, extraction, transformation.
//!
//! Each operation builds its full work list first (so configuration
//! errors surface before anything executes), then opens a fresh session,
//! runs the list under its policy, and closes the session on every path.
//! Phases never share a session, and a failed run leaves the database in
//! whatever state the already-executed queries produced; scripts are
//! written to be safely re-runnable.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use airq_core::{catalog, locations, partition, template};

use crate::error::PipelineError;
use crate::executor::{self, FailurePolicy, Provenance, RunSummary, WorkItem};
use crate::session::Session;

/// Everything the extraction phase needs.
#[derive(Debug, Clone)]
pub struct ExtractRequest {
    pub database_path: PathBuf,
    pub locations_file: PathBuf,
    pub start_month: partition::Month,
    pub end_month: partition::Month,
    /// SQL template with a `{{ data_file_path }}` placeholder.
    pub extract_template: PathBuf,
    /// Filesystem path or object-storage URI the partition layout lives under.
    pub source_base_path: String,
}

/// Run every DDL script under `ddl_dir` against the database, fail-fast.
///
/// Creates the database file if it does not exist yet.
pub fn setup_database(database_path: &Path, ddl_dir: &Path) -> Result<RunSummary, PipelineError> {
    let work_list = work_list_from_dir(ddl_dir)?;
    run_against(database_path, &work_list, FailurePolicy::FailFast)
}

/// Delete the database file if present. Idempotent.
pub fn destroy_database(database_path: &Path) -> Result<(), PipelineError> {
    if database_path.exists() {
        info!(path = %database_path.display(), "removing database file");
        fs::remove_file(database_path)?;
    }
    Ok(())
}

/// Extract remote partitions into the raw table, skipping absent ones.
pub fn extract(request: &ExtractRequest) -> Result<RunSummary, PipelineError> {
    let location_ids = locations::read_location_ids(&request.locations_file)?;
    let partitions =
        partition::expand(&location_ids, request.start_month, request.end_month);
    let extract_template = catalog::read_query(&request.extract_template)?;
    info!(
        locations = location_ids.len(),
        partitions = partitions.len(),
        "compiled extraction partitions"
    );

    let mut work_list = Vec::with_capacity(partitions.len());
    for p in partitions {
        let relative = p.relative_path(partition::DATA_FILE_PATH_TEMPLATE)?;
        let data_file_path = format!("{}/{}", request.source_base_path, relative);
        let sql = template::render(&extract_template, &[("data_file_path", &data_file_path)])?;
        work_list.push(WorkItem {
            sql,
            provenance: Provenance::Partition { partition: p, path: data_file_path },
        });
    }

    run_against(&request.database_path, &work_list, FailurePolicy::SkipMissing)
}

/// Run every transformation script under `query_dir`, fail-fast.
pub fn transform(database_path: &Path, query_dir: &Path) -> Result<RunSummary, PipelineError> {
    let work_list = work_list_from_dir(query_dir)?;
    run_against(database_path, &work_list, FailurePolicy::FailFast)
}

/// Catalog a directory of SQL scripts into an ordered work list.
fn work_list_from_dir(dir: &Path) -> Result<Vec<WorkItem>, PipelineError> {
    let mut work_list = Vec::new();
    for path in catalog::collect_query_paths(dir)? {
        let sql = catalog::read_query(&path)?;
        work_list.push(WorkItem { sql, provenance: Provenance::QueryFile(path) });
    }
    Ok(work_list)
}

/// Open a session, run the list, and close the session on every path.
/// A run failure takes precedence over a close failure in the result.
fn run_against(
    database_path: &Path,
    work_list: &[WorkItem],
    policy: FailurePolicy,
) -> Result<RunSummary, PipelineError> {
    let session = Session::open(database_path)?;
    let run_result = executor::run(&session, work_list, policy);
    let close_result = session.close();

    let summary = run_result?;
    close_result?;
    Ok(summary)
}
