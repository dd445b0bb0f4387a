//! Test utilities for database setup.
//!
//! Provides a file-backed test database initialized with the authoritative
//! schema, eliminating schema duplication in test code.

use rusqlite::Connection;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with a migrated database in a temporary directory,
/// cleaned up automatically when dropped.
pub struct TestEnv {
    /// Temporary directory (kept alive for database file persistence)
    pub temp: TempDir,
    /// Database connection with the full schema applied
    pub conn: Connection,
}

impl TestEnv {
    pub fn new() -> rusqlite::Result<Self> {
        let temp =
            TempDir::new().map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

        let db_path = temp.path().join("wordbank.db");
        let conn = Connection::open(&db_path)?;
        crate::db::schema::run_migrations(&conn)?;

        Ok(Self { temp, conn })
    }

    /// Get the temporary directory path for creating test files.
    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Path of the database file inside the temporary directory.
    pub fn db_path(&self) -> PathBuf {
        self.temp.path().join("wordbank.db")
    }
}
