//! Guidance subsystems: credentials, lookup catalog, records, and the session controller.

pub mod auth;
pub mod catalog;
pub mod guidance;
pub mod session;
