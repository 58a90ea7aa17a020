use thiserror::Error;

use crate::executor::Provenance;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Core(#[from] airq_core::CoreError),

    #[error("database session: {0}")]
    Session(#[source] duckdb::Error),

    #[error("query from {provenance} failed: {source}")]
    Query {
        provenance: Provenance,
        #[source]
        source: duckdb::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
