//! Database session lifecycle.
//!
//! One [`Session`] per orchestration run: opened at the start of a phase,
//! closed unconditionally at its end. The connection is released on drop,
//! so an early return or a propagated failure can never leak it; the
//! explicit [`Session::close`] exists to surface close errors on the
//! normal path.

use std::path::Path;

use duckdb::{AccessMode, Config, Connection};
use tracing::info;

use crate::error::PipelineError;

/// Placeholder remote-storage credentials, set right after connecting so
/// queries against object storage resolve through the httpfs handler
/// instead of failing on missing credential configuration. Real
/// credentials, when a deployment needs them, come from the environment.
const PLACEHOLDER_S3_CREDENTIALS: &str = "\
    SET s3_access_key_id='';\n\
    SET s3_secret_access_key='';\n\
    SET s3_region='';";

/// A single live connection to the analytical database.
pub struct Session {
    conn: Connection,
}

impl Session {
    /// Open a write session, creating the database file if absent.
    pub fn open(path: &Path) -> Result<Self, PipelineError> {
        info!(path = %path.display(), "connecting to database");
        let conn = Connection::open(path).map_err(PipelineError::Session)?;
        Self::init(conn)
    }

    /// Open a read-only session; fails if the database file does not exist.
    ///
    /// Used by the presentation layer only — the pipeline phases always
    /// open write sessions.
    pub fn open_read_only(path: &Path) -> Result<Self, PipelineError> {
        info!(path = %path.display(), "connecting to database (read-only)");
        let config = Config::default()
            .access_mode(AccessMode::ReadOnly)
            .map_err(PipelineError::Session)?;
        let conn = Connection::open_with_flags(path, config).map_err(PipelineError::Session)?;
        Self::init(conn)
    }

    fn init(conn: Connection) -> Result<Self, PipelineError> {
        conn.execute_batch(PLACEHOLDER_S3_CREDENTIALS)
            .map_err(PipelineError::Session)?;
        Ok(Session { conn })
    }

    /// Execute one SQL statement batch against this session.
    pub fn execute(&self, sql: &str) -> Result<(), duckdb::Error> {
        self.conn.execute_batch(sql)
    }

    /// Close the session, surfacing any close failure.
    pub fn close(self) -> Result<(), PipelineError> {
        info!("closing database connection");
        self.conn
            .close()
            .map_err(|(_, e)| PipelineError::Session(e))
    }
}
