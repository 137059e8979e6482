//! Credential store: signup, login, and password reset against the `users` table.
//!
//! Passwords are stored as an unsalted single-round SHA-256 hex digest so that
//! rows written by earlier releases keep verifying. Identical passwords hash
//! identically across accounts. There is no rate limiting or lockout, and reset
//! does not ask for the old password.

use crate::core::broker::DbBroker;
use crate::core::error::{self, FailureKind, Outcome};
use crate::core::store::Store;
use rusqlite::{ErrorCode, OptionalExtension, params};
use serde::Serialize;

pub const MSG_SIGNUP_OK: &str = "Signup successful. You can login now.";
pub const MSG_DUPLICATE_USERNAME: &str = "Username already exists. Choose a different username.";
pub const MSG_INVALID_USERNAME: &str = "Username must not be empty.";
pub const MSG_INVALID_CREDENTIALS: &str = "Invalid username or password.";
pub const MSG_USER_NOT_FOUND: &str = "Username not found.";
pub const MSG_RESET_OK: &str = "Password reset successful. You can login now.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginOutcome {
    pub user_id: Option<i64>,
    pub failure: Option<FailureKind>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub created_at: String,
}

pub fn hash_password(password: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Compare two digests without bailing out at the first differing byte.
fn digest_eq(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.bytes().zip(b.bytes()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _) if e.code == ErrorCode::ConstraintViolation
    )
}

pub fn signup(store: &Store, username: &str, password: &str) -> Result<Outcome, error::PathgenError> {
    if username.is_empty() {
        tracing::info!("signup rejected: empty username");
        return Ok(Outcome::failed(FailureKind::InvalidUsername, MSG_INVALID_USERNAME));
    }

    let broker = DbBroker::new(store);
    let digest = hash_password(password);

    let inserted = broker.with_conn("auth.signup", |conn| {
        match conn.execute(
            "INSERT INTO users (username, password) VALUES (?1, ?2)",
            params![username, digest],
        ) {
            Ok(_) => Ok(true),
            Err(e) if is_unique_violation(&e) => Ok(false),
            Err(e) => Err(e.into()),
        }
    })?;

    if inserted {
        tracing::info!(username, "user signed up");
        Ok(Outcome::ok(MSG_SIGNUP_OK))
    } else {
        tracing::info!(username, "signup rejected: username taken");
        Ok(Outcome::failed(FailureKind::DuplicateUsername, MSG_DUPLICATE_USERNAME))
    }
}

pub fn login(store: &Store, username: &str, password: &str) -> Result<LoginOutcome, error::PathgenError> {
    let broker = DbBroker::new(store);

    let row: Option<(i64, String)> = broker.with_conn("auth.login", |conn| {
        Ok(conn
            .query_row(
                "SELECT id, password FROM users WHERE username = ?1",
                params![username],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?)
    })?;

    match row {
        Some((id, stored)) if digest_eq(&hash_password(password), &stored) => {
            tracing::info!(username, user_id = id, "user logged in");
            Ok(LoginOutcome {
                user_id: Some(id),
                failure: None,
                message: format!("Welcome, {}!", username),
            })
        }
        _ => {
            tracing::info!(username, "login rejected");
            Ok(LoginOutcome {
                user_id: None,
                failure: Some(FailureKind::InvalidCredentials),
                message: MSG_INVALID_CREDENTIALS.to_string(),
            })
        }
    }
}

pub fn reset_password(
    store: &Store,
    username: &str,
    new_password: &str,
) -> Result<Outcome, error::PathgenError> {
    let broker = DbBroker::new(store);
    let digest = hash_password(new_password);

    let updated = broker.with_conn("auth.reset", |conn| {
        let exists: Option<i64> = conn
            .query_row(
                "SELECT id FROM users WHERE username = ?1",
                params![username],
                |row| row.get(0),
            )
            .optional()?;
        if exists.is_none() {
            return Ok(false);
        }
        conn.execute(
            "UPDATE users SET password = ?1 WHERE username = ?2",
            params![digest, username],
        )?;
        Ok(true)
    })?;

    if updated {
        tracing::info!(username, "password reset");
        Ok(Outcome::ok(MSG_RESET_OK))
    } else {
        tracing::info!(username, "reset rejected: unknown user");
        Ok(Outcome::failed(FailureKind::UserNotFound, MSG_USER_NOT_FOUND))
    }
}

pub fn user_exists(store: &Store, username: &str) -> Result<bool, error::PathgenError> {
    let broker = DbBroker::new(store);
    broker.with_conn("auth.exists", |conn| {
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM users WHERE username = ?1",
            params![username],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    })
}

pub fn find_user(store: &Store, user_id: i64) -> Result<Option<User>, error::PathgenError> {
    let broker = DbBroker::new(store);
    broker.with_conn("auth.find", |conn| {
        Ok(conn
            .query_row(
                "SELECT id, username, created_at FROM users WHERE id = ?1",
                params![user_id],
                |row| {
                    Ok(User {
                        id: row.get(0)?,
                        username: row.get(1)?,
                        created_at: row.get(2)?,
                    })
                },
            )
            .optional()?)
    })
}
