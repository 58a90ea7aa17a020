use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("query directory not found: {0}")]
    QueryDirNotFound(PathBuf),

    #[error("locations file {path}: {message}")]
    Locations { path: PathBuf, message: String },

    #[error("template error: {0}")]
    Template(String),

    #[error("invalid month '{0}': expected YYYY-MM")]
    InvalidMonth(String),
}
