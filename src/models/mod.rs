//! Data models for the backup trigger.
//!
//! Everything here is built per request and dropped once the response is
//! written. Only [`task::Task`] maps to a database row, via `sqlx::FromRow`.

pub mod backup_request;
pub mod kind;
pub mod task;
