//! BackupService: enumerate kinds, build the job, enqueue it.
//!
//! A trigger either ends `submitted` (the queue accepted the task) or
//! `failed`. Nothing is retried here; the queue owns redelivery and the
//! execution service owns the job from then on.

use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info, instrument};

use super::{
    kind_enumerator::enumerate_kinds,
    kind_store::{KindStore, StoreError},
    task_queue::{BACKUP_PATH, BACKUP_QUEUE_NAME, QueueError, TaskQueue},
};
use crate::{
    config::BackupConfig,
    models::{
        backup_request::BackupJobRequest,
        task::{PostTask, Task},
    },
};

#[derive(Debug, Error)]
pub enum BackupError {
    #[error("could not list datastore kinds")]
    Enumeration(#[source] StoreError),
    #[error("could not enqueue backup job")]
    Submission(#[source] QueueError),
}

#[derive(Clone)]
pub struct BackupService {
    store: Arc<dyn KindStore>,
    queue: Arc<dyn TaskQueue>,
    config: BackupConfig,
}

impl BackupService {
    pub fn new(store: Arc<dyn KindStore>, queue: Arc<dyn TaskQueue>, config: BackupConfig) -> Self {
        Self {
            store,
            queue,
            config,
        }
    }

    /// Build the job request from the current set of kinds.
    pub async fn prepare(&self) -> Result<BackupJobRequest, BackupError> {
        let kinds = enumerate_kinds(self.store.as_ref())
            .await
            .map_err(BackupError::Enumeration)?;

        Ok(BackupJobRequest::build(
            &kinds,
            &self.config.ignore_kinds,
            &self.config.bucket_name,
            &self.config.backup_prefix,
        ))
    }

    /// Enumerate, build and enqueue one backup job.
    #[instrument(
        name = "backup.trigger",
        skip(self),
        fields(bucket = %self.config.bucket_name, prefix = %self.config.backup_prefix)
    )]
    pub async fn trigger(&self) -> Result<Task, BackupError> {
        let request = match self.prepare().await {
            Ok(request) => request,
            Err(err) => {
                error!(error = ?err, "kind enumeration failed; nothing enqueued");
                return Err(err);
            }
        };

        let kinds = request.kinds().len();
        let task = PostTask::new(BACKUP_PATH, &request);

        match self.queue.add(task, BACKUP_QUEUE_NAME).await {
            Ok(task) => {
                info!(task_id = %task.id, queue = BACKUP_QUEUE_NAME, kinds, "backup job enqueued");
                Ok(task)
            }
            Err(err) => {
                error!(error = ?err, queue = BACKUP_QUEUE_NAME, "backup job enqueue failed");
                Err(BackupError::Submission(err))
            }
        }
    }
}
