//! Database configuration and environment variable handling.

use std::env;
use std::path::PathBuf;

/// Database configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Path of the SQLite database file.
    pub path: PathBuf,
}

impl DbConfig {
    /// Create a new database configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `STUDENTS_DB_PATH` (optional, default: `data/students.db`):
    ///   location of the SQLite file. The parent directory is created at
    ///   startup if missing, so a named volume can be mounted there.
    pub fn from_env() -> Self {
        let path = env::var("STUDENTS_DB_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data").join("students.db"));
        Self { path }
    }
}
