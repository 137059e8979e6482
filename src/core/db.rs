use crate::core::broker::DbBroker;
use crate::core::error;
use crate::core::schemas;
use crate::core::store::Store;
use rusqlite::Connection;
use std::fs;
use std::path::Path;

pub fn db_connect(db_path: &Path) -> Result<Connection, error::PathgenError> {
    let conn = Connection::open(db_path)?;
    conn.busy_timeout(std::time::Duration::from_secs(5))
        .map_err(error::PathgenError::RusqliteError)?;
    Ok(conn)
}

/// Create both tables if they are missing. Safe to call on every start.
pub fn initialize_db(store: &Store) -> Result<(), error::PathgenError> {
    if let Some(parent_dir) = store.db_path.parent()
        && !parent_dir.as_os_str().is_empty()
    {
        fs::create_dir_all(parent_dir).map_err(error::PathgenError::IoError)?;
    }

    let broker = DbBroker::new(store);
    broker.with_conn("db.init", |conn| {
        conn.execute(schemas::USERS_SCHEMA, [])?;
        conn.execute(schemas::GUIDANCE_SCHEMA, [])?;
        conn.execute(schemas::GUIDANCE_SCHEMA_INDEX, [])?;
        Ok(())
    })?;

    tracing::debug!(db = %store.db_path.display(), "database initialized");
    Ok(())
}
