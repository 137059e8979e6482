//! Database schema definitions for the guidance store.
//!
//! A single SQLite file holds two tables:
//! 1. users: account names and password digests.
//! 2. guidance: one row per submitted questionnaire.
//!
//! Column names and types are part of the on-disk contract; existing databases
//! written by earlier releases must keep loading.

pub const DEFAULT_DB_PATH: &str = "pathgenerator.db";
/// Audit trail file is `<db-stem>.events.jsonl`; append-only, rotate by moving it aside.
pub const AUDIT_LOG_SUFFIX: &str = "events.jsonl";
pub const DEFAULT_AUDIT_STEM: &str = "pathgen";
pub const CONFIG_FILE_NAME: &str = "pathgen.toml";

pub const USERS_SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT UNIQUE,
        password TEXT,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )
";

// user_id is deliberately not a FOREIGN KEY: callers only save on behalf of an
// authenticated session.
pub const GUIDANCE_SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS guidance (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER,
        user_type TEXT,
        standard TEXT,
        marks TEXT,
        desired_course TEXT,
        chosen_subfield TEXT,
        chosen_stream TEXT,
        career_options TEXT,
        entrance_exams TEXT,
        extra_info TEXT,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )
";
pub const GUIDANCE_SCHEMA_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_guidance_user ON guidance(user_id)";
