//! SQL script discovery.
//!
//! Walks a directory tree and returns every `.sql` file in ascending
//! lexicographic order of its full path. Scripts are named with numeric
//! prefixes so that ordering doubles as dependency ordering, which makes
//! deterministic output mandatory here.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::CoreError;

/// Walk `root` and return every file with a `.sql` extension, sorted
/// ascending by full path.
///
/// Zero matches is a valid empty result. A missing root directory is a
/// [`CoreError::QueryDirNotFound`].
pub fn collect_query_paths(root: &Path) -> Result<Vec<PathBuf>, CoreError> {
    if !root.is_dir() {
        return Err(CoreError::QueryDirNotFound(root.to_path_buf()));
    }

    let mut paths = Vec::new();
    for entry in walkdir::WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if path.is_file() && has_sql_extension(path) {
            paths.push(path.to_path_buf());
        }
    }

    // walkdir's traversal order is not guaranteed across platforms.
    paths.sort();
    info!(count = paths.len(), dir = %root.display(), "found sql scripts");
    Ok(paths)
}

/// Read a SQL file's contents. No parsing or validation happens here;
/// a malformed script surfaces as an execution failure later.
pub fn read_query(path: &Path) -> Result<String, CoreError> {
    Ok(fs::read_to_string(path)?)
}

fn has_sql_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("sql"))
        .unwrap_or(false)
}
