use pathgen::core::broker::{self, DbBroker};
use pathgen::core::config::{self, Config, LogFormat};
use pathgen::core::db;
use pathgen::core::error::PathgenError;
use pathgen::core::schemas;
use pathgen::core::store::Store;
use pathgen::plugins::auth;
use rusqlite::Connection;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn table_columns(conn: &Connection, table: &str) -> Vec<String> {
    let mut stmt = conn
        .prepare(&format!("PRAGMA table_info({table})"))
        .expect("pragma");
    let columns: Vec<String> = stmt
        .query_map([], |row| row.get::<_, String>(1))
        .expect("query")
        .map(|c| c.expect("column"))
        .collect();
    columns
}

#[test]
fn initialize_creates_both_tables_and_is_idempotent() {
    let tmp = tempdir().expect("tempdir");
    let store = Store::new(tmp.path().join("nested").join("pathgenerator.db"));

    db::initialize_db(&store).expect("first init");
    db::initialize_db(&store).expect("second init");
    assert!(store.db_path.exists());

    let conn = db::db_connect(&store.db_path).expect("connect");
    assert_eq!(
        table_columns(&conn, "users"),
        vec!["id", "username", "password", "created_at"]
    );
    assert_eq!(
        table_columns(&conn, "guidance"),
        vec![
            "id",
            "user_id",
            "user_type",
            "standard",
            "marks",
            "desired_course",
            "chosen_subfield",
            "chosen_stream",
            "career_options",
            "entrance_exams",
            "extra_info",
            "created_at"
        ]
    );
}

#[test]
fn broker_records_each_call_in_the_audit_log() {
    let tmp = tempdir().expect("tempdir");
    let store = Store::new(tmp.path().join("pathgenerator.db"));
    db::initialize_db(&store).expect("init");
    auth::signup(&store, "asha", "pw").expect("signup");
    let _ = auth::login(&store, "asha", "wrong").expect("login");

    let events = broker::read_audit_log(&store).expect("audit log");
    let ops: Vec<_> = events.iter().map(|e| e.op.as_str()).collect();
    assert_eq!(ops, vec!["db.init", "auth.signup", "auth.login"]);
    assert!(events.iter().all(|e| e.status == "success"));
    assert!(events.iter().all(|e| e.db_id == "pathgenerator.db"));
    assert_eq!(
        store.audit_log_path(),
        tmp.path().join("pathgenerator.events.jsonl")
    );
}

#[test]
fn each_database_keeps_its_own_audit_log() {
    let tmp = tempdir().expect("tempdir");
    let first = Store::new(tmp.path().join("first.db"));
    let second = Store::new(tmp.path().join("second.db"));
    db::initialize_db(&first).expect("init first");
    db::initialize_db(&second).expect("init second");
    auth::signup(&second, "asha", "pw").expect("signup");

    assert_eq!(first.audit_log_path(), tmp.path().join("first.events.jsonl"));
    assert_eq!(broker::read_audit_log(&first).expect("first log").len(), 1);
    assert_eq!(broker::read_audit_log(&second).expect("second log").len(), 2);
    assert!(
        first
            .audit_log_path()
            .to_string_lossy()
            .ends_with(schemas::AUDIT_LOG_SUFFIX)
    );
}

#[test]
fn broker_marks_failed_calls_and_skips_log_when_disabled() {
    let tmp = tempdir().expect("tempdir");
    let store = Store::new(tmp.path().join("pathgenerator.db"));
    let broker = DbBroker::new(&store);

    let result: Result<(), PathgenError> = broker.with_conn("test.fail", |conn| {
        conn.execute("INSERT INTO nowhere VALUES (1)", [])?;
        Ok(())
    });
    assert!(matches!(result, Err(PathgenError::RusqliteError(_))));
    let events = broker::read_audit_log(&store).expect("audit log");
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].status, "error");

    let quiet = Store::new(tmp.path().join("quiet.db")).without_audit();
    DbBroker::new(&quiet)
        .with_conn("test.ok", |_| Ok(()))
        .expect("ok call");
    assert_eq!(broker::read_audit_log(&store).expect("audit log").len(), 1);
}

#[test]
fn connection_is_released_after_each_call() {
    let tmp = tempdir().expect("tempdir");
    let store = Store::new(tmp.path().join("pathgenerator.db")).without_audit();
    db::initialize_db(&store).expect("init");
    auth::signup(&store, "asha", "pw").expect("signup");

    // An exclusive lock only succeeds if nothing else holds the file open for writing.
    let conn = Connection::open(&store.db_path).expect("open");
    conn.execute_batch("BEGIN EXCLUSIVE; COMMIT;")
        .expect("no lingering writer");
}

#[test]
fn config_file_in_working_dir_is_picked_up() {
    let tmp = tempdir().expect("tempdir");
    fs::write(
        tmp.path().join(schemas::CONFIG_FILE_NAME),
        "db_path = \"guide.db\"\naudit_log = false\nlog_level = \"info\"\nlog_format = \"json\"\n",
    )
    .expect("write config");

    let cfg = config::load_config(None, tmp.path()).expect("load");
    if std::env::var(config::DB_PATH_ENV).is_err() {
        assert_eq!(cfg.db_path, PathBuf::from("guide.db"));
    }
    assert!(!cfg.audit_log);
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.log_format, LogFormat::Json);
}

#[test]
fn missing_default_config_means_defaults() {
    let tmp = tempdir().expect("tempdir");
    let cfg = config::load_config(None, tmp.path()).expect("load");
    assert_eq!(cfg.audit_log, Config::default().audit_log);
    assert_eq!(cfg.log_format, LogFormat::Text);
}

#[test]
fn missing_explicit_config_is_an_error() {
    let tmp = tempdir().expect("tempdir");
    let err = config::load_config(Some(tmp.path().join("nope.toml").as_path()), tmp.path())
        .expect_err("explicit config must exist");
    assert!(matches!(err, PathgenError::ConfigError(_)));
}
