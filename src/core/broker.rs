use crate::core::db;
use crate::core::error;
use crate::core::store::Store;
use crate::core::time;
use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Per-call connection scope for every storage operation.
///
/// Each `with_conn` opens a fresh connection, runs the closure, and drops the
/// connection before returning, on success and error alike. There is no
/// in-process lock; SQLite's own locking arbitrates concurrent writers.
pub struct DbBroker {
    db_path: PathBuf,
    audit_log_path: Option<PathBuf>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BrokerEvent {
    pub ts: String,
    pub event_id: String,
    pub op: String,
    pub db_id: String,
    pub status: String,
}

impl DbBroker {
    pub fn new(store: &Store) -> Self {
        Self {
            db_path: store.db_path.clone(),
            audit_log_path: store.audit.then(|| store.audit_log_path()),
        }
    }

    /// Execute a closure with a connection that lives exactly as long as the call.
    pub fn with_conn<F, R>(&self, op_name: &str, f: F) -> Result<R, error::PathgenError>
    where
        F: FnOnce(&Connection) -> Result<R, error::PathgenError>,
    {
        let db_id = self
            .db_path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        let result = db::db_connect(&self.db_path).and_then(|conn| f(&conn));

        let status = if result.is_ok() { "success" } else { "error" };
        tracing::trace!(op = op_name, db = %db_id, status, "storage call");
        if let Err(e) = self.log_event(op_name, &db_id, status) {
            tracing::warn!(error = %e, "failed to append audit event");
        }

        result
    }

    fn log_event(&self, op: &str, db_id: &str, status: &str) -> Result<(), error::PathgenError> {
        use std::fs::OpenOptions;
        use std::io::Write;

        let Some(path) = &self.audit_log_path else {
            return Ok(());
        };

        let ev = BrokerEvent {
            ts: time::now_epoch_z(),
            event_id: time::new_event_id(),
            op: op.to_string(),
            db_id: db_id.to_string(),
            status: status.to_string(),
        };

        let mut f = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(error::PathgenError::IoError)?;

        let line = serde_json::to_string(&ev)
            .map_err(|e| error::PathgenError::ValidationError(e.to_string()))?;
        writeln!(f, "{}", line).map_err(error::PathgenError::IoError)?;
        Ok(())
    }
}

/// Read every audit event recorded for a store, oldest first.
pub fn read_audit_log(store: &Store) -> Result<Vec<BrokerEvent>, error::PathgenError> {
    let path = store.audit_log_path();
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = std::fs::read_to_string(&path)?;
    content
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| {
            serde_json::from_str(l).map_err(|e| error::PathgenError::ValidationError(e.to_string()))
        })
        .collect()
}
