use sqlx::SqlitePool;
use std::sync::Arc;

use crate::{
    config::BackupConfig,
    services::{
        backup_service::BackupService, kind_store::SqliteKindStore, task_queue::SqliteTaskQueue,
    },
};

/// Shared state carried by the router.
#[derive(Clone)]
pub struct AppState {
    /// Pool checked by the readiness probe.
    pub db: Arc<SqlitePool>,
    pub backup: BackupService,
}

impl AppState {
    pub fn new(db: Arc<SqlitePool>, backup: BackupService) -> Self {
        Self { db, backup }
    }

    /// Kind store and task queue both backed by `db`.
    pub fn sqlite(db: Arc<SqlitePool>, config: BackupConfig) -> Self {
        let backup = BackupService::new(
            Arc::new(SqliteKindStore::new(db.clone())),
            Arc::new(SqliteTaskQueue::new(db.clone())),
            config,
        );
        Self::new(db, backup)
    }
}
