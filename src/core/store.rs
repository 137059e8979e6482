//! Store handle for the guidance database.
//!
//! Every credential and guidance operation takes a `Store`; nothing holds a live
//! connection between calls.

use crate::core::schemas;
use std::path::{Path, PathBuf};

/// Location of the SQLite file plus the audit trail that sits beside it.
#[derive(Debug, Clone)]
pub struct Store {
    /// Path to the SQLite database file.
    pub db_path: PathBuf,
    /// Whether storage calls append to the JSONL audit trail.
    pub audit: bool,
}

impl Store {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
            audit: true,
        }
    }

    pub fn without_audit(mut self) -> Self {
        self.audit = false;
        self
    }

    /// `<db-stem>.events.jsonl` beside the database, so each database keeps its own trail.
    pub fn audit_log_path(&self) -> PathBuf {
        let dir = self.db_path.parent().unwrap_or_else(|| Path::new(""));
        let stem = self
            .db_path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| schemas::DEFAULT_AUDIT_STEM.to_string());
        dir.join(format!("{}.{}", stem, schemas::AUDIT_LOG_SUFFIX))
    }
}
