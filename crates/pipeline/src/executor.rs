//! Sequential query execution under two failure policies.
//!
//! The engine walks a work list in order, one query in flight at a time.
//! Fail-fast runs (schema setup, transformation) abort on the first
//! failure; skip-and-log runs (extraction) tolerate exactly one failure
//! class — the referenced remote object does not exist — because a sensor
//! with no data for a month is a legitimate absence, not a transient
//! fault. No retries, no timeouts, no cancellation.

use std::fmt;
use std::path::PathBuf;

use tracing::{info, warn};

use airq_core::Partition;

use crate::error::PipelineError;
use crate::session::Session;

/// Where a rendered query came from, for log and error attribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Provenance {
    /// A SQL script discovered on disk.
    QueryFile(PathBuf),
    /// A query generated for one remote partition.
    Partition { partition: Partition, path: String },
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provenance::QueryFile(path) => write!(f, "{}", path.display()),
            Provenance::Partition { path, .. } => write!(f, "partition {path}"),
        }
    }
}

/// A fully rendered query, ready to execute.
#[derive(Debug, Clone)]
pub struct WorkItem {
    pub sql: String,
    pub provenance: Provenance,
}

/// How the engine reacts to a failing item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Any failure aborts the run. Schema setup and transformation.
    FailFast,
    /// A missing-source failure is logged and skipped; anything else
    /// aborts. Extraction.
    SkipMissing,
}

/// Per-run result counts. An empty work list is a valid no-op run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of queries that executed successfully.
    pub executed: usize,
    /// Provenance of every item skipped as a missing source.
    pub skipped: Vec<Provenance>,
}

impl RunSummary {
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

/// True when the driver reports the query's source object as absent.
///
/// DuckDB surfaces engine failures through one driver variant whose
/// message begins with a stable category tag; a missing file or remote
/// object carries the `IO Error` tag. Only that leading tag is examined —
/// never free text deeper in the message.
fn is_missing_source(err: &duckdb::Error) -> bool {
    match err {
        duckdb::Error::DuckDBFailure(_, Some(msg)) => msg.starts_with("IO Error"),
        _ => false,
    }
}

/// Execute every item in the work list, in order, against the session.
///
/// Returns the run's [`RunSummary`] on success. On failure the returned
/// [`PipelineError::Query`] carries the failing item's provenance; items
/// after it never execute. The caller owns the session and closes it on
/// every path.
pub fn run(
    session: &Session,
    work_list: &[WorkItem],
    policy: FailurePolicy,
) -> Result<RunSummary, PipelineError> {
    let mut summary = RunSummary::default();

    for item in work_list {
        match session.execute(&item.sql) {
            Ok(()) => {
                info!(source = %item.provenance, "executed query");
                summary.executed += 1;
            }
            Err(e) if policy == FailurePolicy::SkipMissing && is_missing_source(&e) => {
                warn!(source = %item.provenance, error = %e, "source not found, skipping");
                summary.skipped.push(item.provenance.clone());
            }
            Err(e) => {
                return Err(PipelineError::Query {
                    provenance: item.provenance.clone(),
                    source: e,
                });
            }
        }
    }

    info!(
        executed = summary.executed,
        skipped = summary.skipped_count(),
        "run complete"
    );
    Ok(summary)
}
