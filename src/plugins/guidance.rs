//! Guidance record store: one immutable row per submitted questionnaire.

use crate::core::broker::DbBroker;
use crate::core::error::{self, FailureKind, Outcome};
use crate::core::store::Store;
use rusqlite::{OptionalExtension, params};
use serde::{Deserialize, Serialize};

pub const MSG_SAVED: &str = "Career guidance information saved successfully!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum UserType {
    Student,
    Parent,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Student => "Student",
            UserType::Parent => "Parent",
        }
    }
}

/// The nine questionnaire fields written to a `guidance` row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuidanceRecord {
    pub user_type: UserType,
    pub standard: String,
    pub marks: String,
    pub desired_course: String,
    pub chosen_subfield: String,
    pub chosen_stream: String,
    /// Comma-joined (`", "`) career list.
    pub career_options: String,
    /// Comma-joined (`", "`) exam list.
    pub entrance_exams: String,
    pub extra_info: String,
}

/// A row as read back from storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredGuidance {
    pub id: i64,
    pub user_id: i64,
    /// Kept as text: rows written elsewhere are not guaranteed to hold "Student"/"Parent".
    pub user_type: String,
    pub standard: String,
    pub marks: String,
    pub desired_course: String,
    pub chosen_subfield: String,
    pub chosen_stream: String,
    pub career_options: String,
    pub entrance_exams: String,
    pub extra_info: String,
    pub created_at: String,
}

const SELECT_COLUMNS: &str = "SELECT id, user_id, user_type, standard, marks, desired_course, chosen_subfield, chosen_stream, career_options, entrance_exams, extra_info, created_at FROM guidance";

fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<StoredGuidance> {
    Ok(StoredGuidance {
        id: row.get(0)?,
        user_id: row.get(1)?,
        user_type: row.get(2)?,
        standard: row.get(3)?,
        marks: row.get(4)?,
        desired_course: row.get(5)?,
        chosen_subfield: row.get(6)?,
        chosen_stream: row.get(7)?,
        career_options: row.get(8)?,
        entrance_exams: row.get(9)?,
        extra_info: row.get(10)?,
        created_at: row.get(11)?,
    })
}

fn insert(store: &Store, user_id: i64, record: &GuidanceRecord) -> Result<i64, error::PathgenError> {
    let broker = DbBroker::new(store);
    broker.with_conn("guidance.save", |conn| {
        conn.execute(
            "INSERT INTO guidance
                (user_id, user_type, standard, marks, desired_course, chosen_subfield, chosen_stream, career_options, entrance_exams, extra_info)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                user_id,
                record.user_type.as_str(),
                record.standard,
                record.marks,
                record.desired_course,
                record.chosen_subfield,
                record.chosen_stream,
                record.career_options,
                record.entrance_exams,
                record.extra_info
            ],
        )?;
        Ok(conn.last_insert_rowid())
    })
}

/// Insert one record. Storage failures are reported in the outcome, never returned
/// as an error; the record is not retried or queued.
pub fn save(store: &Store, user_id: i64, record: &GuidanceRecord) -> Outcome {
    match insert(store, user_id, record) {
        Ok(id) => {
            tracing::info!(user_id, guidance_id = id, course = %record.desired_course, "guidance saved");
            Outcome::ok(MSG_SAVED)
        }
        Err(e) => {
            tracing::error!(user_id, error = %e, "guidance save failed; record dropped");
            Outcome::failed(
                FailureKind::PersistenceFailure,
                format!("Error saving data: {}", e),
            )
        }
    }
}

pub fn get(store: &Store, id: i64) -> Result<Option<StoredGuidance>, error::PathgenError> {
    let broker = DbBroker::new(store);
    broker.with_conn("guidance.get", |conn| {
        Ok(conn
            .query_row(&format!("{SELECT_COLUMNS} WHERE id = ?1"), params![id], map_row)
            .optional()?)
    })
}

/// All records for a user, oldest first.
pub fn list_for_user(store: &Store, user_id: i64) -> Result<Vec<StoredGuidance>, error::PathgenError> {
    let broker = DbBroker::new(store);
    broker.with_conn("guidance.list", |conn| {
        let mut stmt = conn.prepare(&format!("{SELECT_COLUMNS} WHERE user_id = ?1 ORDER BY id"))?;
        let rows = stmt.query_map(params![user_id], map_row)?;
        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    })
}
