//! Asynchronous task queue that dispatches jobs to the backup execution service.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::models::task::{PostTask, Task};

/// Queue the backup job is enqueued on.
pub const BACKUP_QUEUE_NAME: &str = "backupQueue";

/// Path on the platform that starts a datastore backup.
pub const BACKUP_PATH: &str = "/_ah/datastore_admin/backup.create";

#[derive(Debug, Error)]
pub enum QueueError {
    #[error("queue `{queue}` rejected task: {reason}")]
    Rejected { queue: String, reason: String },
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

pub type QueueResult<T> = Result<T, QueueError>;

#[async_trait]
pub trait TaskQueue: Send + Sync {
    /// Add a POST task to `queue_name`. Delivery and retries belong to the queue.
    async fn add(&self, task: PostTask, queue_name: &str) -> QueueResult<Task>;
}

/// Queue backed by the `tasks` table; the execution service polls it.
#[derive(Clone)]
pub struct SqliteTaskQueue {
    db: Arc<SqlitePool>,
}

impl SqliteTaskQueue {
    pub fn new(db: Arc<SqlitePool>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TaskQueue for SqliteTaskQueue {
    async fn add(&self, task: PostTask, queue_name: &str) -> QueueResult<Task> {
        if queue_name.is_empty() {
            return Err(QueueError::Rejected {
                queue: queue_name.to_string(),
                reason: "queue name is empty".into(),
            });
        }

        let task = Task {
            id: Uuid::new_v4(),
            queue_name: queue_name.to_string(),
            method: "POST".to_string(),
            path: task.path,
            payload: task.payload,
            created_at: Utc::now(),
        };

        sqlx::query(
            "INSERT INTO tasks (id, queue_name, method, path, payload, created_at) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(task.id)
        .bind(&task.queue_name)
        .bind(&task.method)
        .bind(&task.path)
        .bind(&task.payload)
        .bind(task.created_at)
        .execute(&*self.db)
        .await?;

        debug!(task_id = %task.id, queue = %task.queue_name, "task stored");
        Ok(task)
    }
}
