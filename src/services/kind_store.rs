//! Read-only access to the datastore's "all kinds" metadata collection.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::SqlitePool;
use thiserror::Error;

use crate::models::kind::KindPage;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("kind scan failed: {0}")]
    Backend(String),
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Key-only scan over the kinds known to a datastore.
///
/// Implementations return kinds in their natural order, resuming strictly
/// after `cursor` when one is given, and never more than `limit` per page.
#[async_trait]
pub trait KindStore: Send + Sync {
    async fn fetch_kinds(&self, cursor: Option<&str>, limit: usize) -> StoreResult<KindPage>;
}

/// Datastore kept in SQLite: every distinct `entities.kind` is a kind.
#[derive(Clone)]
pub struct SqliteKindStore {
    db: Arc<SqlitePool>,
}

impl SqliteKindStore {
    pub fn new(db: Arc<SqlitePool>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl KindStore for SqliteKindStore {
    async fn fetch_kinds(&self, cursor: Option<&str>, limit: usize) -> StoreResult<KindPage> {
        let limit = limit.max(1);

        // One extra row tells us whether another page follows.
        let mut kinds = sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT kind FROM entities \
             WHERE (? IS NULL OR kind > ?) \
             ORDER BY kind ASC \
             LIMIT ?",
        )
        .bind(cursor)
        .bind(cursor)
        .bind((limit + 1) as i64)
        .fetch_all(&*self.db)
        .await?;

        let next_cursor = if kinds.len() > limit {
            kinds.truncate(limit);
            kinds.last().cloned()
        } else {
            None
        };

        Ok(KindPage { kinds, next_cursor })
    }
}
