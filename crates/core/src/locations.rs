//! Location-identifier source.
//!
//! The locations file is a JSON object whose keys are sensor location IDs;
//! the values carry dashboard metadata this pipeline never reads. Key order
//! in the file is the order locations are extracted in, so the object is
//! parsed into an [`IndexMap`] rather than a sorted map.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;

use crate::error::CoreError;

/// Read location IDs from a keyed JSON collection, preserving file order.
///
/// Unreadable or malformed input is fatal.
pub fn read_location_ids(path: &Path) -> Result<Vec<String>, CoreError> {
    let text = fs::read_to_string(path).map_err(|e| CoreError::Locations {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let locations: IndexMap<String, serde_json::Value> =
        serde_json::from_str(&text).map_err(|e| CoreError::Locations {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    Ok(locations.keys().cloned().collect())
}
