pub mod error;
pub mod executor;
pub mod ops;
pub mod session;

pub use error::PipelineError;
pub use executor::{run, FailurePolicy, Provenance, RunSummary, WorkItem};
pub use session::Session;
