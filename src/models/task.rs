//! Tasks handed to the asynchronous queue.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::backup_request::BackupJobRequest;

/// A POST task that has not been enqueued yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostTask {
    /// Path on the platform the queue will POST to.
    pub path: String,

    /// Form-encoded request body.
    pub payload: String,
}

impl PostTask {
    pub fn new(path: impl Into<String>, request: &BackupJobRequest) -> Self {
        Self {
            path: path.into(),
            payload: request.encode(),
        }
    }
}

/// A task accepted by the queue.
#[derive(Serialize, Deserialize, Clone, FromRow, Debug)]
pub struct Task {
    /// Identifier assigned on enqueue.
    pub id: Uuid,

    /// Queue the task was added to.
    pub queue_name: String,

    /// HTTP method the queue dispatches with (always `POST` here).
    pub method: String,

    pub path: String,
    pub payload: String,

    pub created_at: DateTime<Utc>,
}
