//! Common test utilities and fixtures

// Test utilities may not all be used in every test
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{Router, body::Body, http::Request, response::Response};
use chrono::Utc;
use datastore_backup::{
    config::BackupConfig,
    db,
    models::{
        kind::{ExclusionSet, KindPage},
        task::{PostTask, Task},
    },
    routes::routes::routes,
    services::{
        backup_service::BackupService,
        kind_store::{KindStore, StoreError, StoreResult},
        task_queue::{QueueError, QueueResult, TaskQueue},
    },
    state::AppState,
};
use http_body_util::BodyExt;
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};
use tower::ServiceExt;
use uuid::Uuid;

/// Single-connection in-memory database with the schema applied.
pub async fn memory_pool() -> Arc<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory SQLite");
    db::run_migrations(&pool)
        .await
        .expect("Failed to apply schema");
    Arc::new(pool)
}

pub fn backup_config(bucket: &str, prefix: &str, ignore: &str) -> BackupConfig {
    BackupConfig {
        bucket_name: bucket.to_string(),
        backup_prefix: prefix.to_string(),
        ignore_kinds: ExclusionSet::parse(ignore),
    }
}

/// Kind store serving fixed pages of kinds, optionally failing on one page.
pub struct FakeKindStore {
    pages: Vec<Vec<String>>,
    fail_on_page: Option<usize>,
}

impl FakeKindStore {
    pub fn single_page(kinds: &[&str]) -> Self {
        Self::paged(vec![kinds.to_vec()])
    }

    pub fn paged(pages: Vec<Vec<&str>>) -> Self {
        Self {
            pages: pages
                .into_iter()
                .map(|page| page.into_iter().map(str::to_string).collect())
                .collect(),
            fail_on_page: None,
        }
    }

    pub fn failing_on_page(mut self, page: usize) -> Self {
        self.fail_on_page = Some(page);
        self
    }
}

#[async_trait]
impl KindStore for FakeKindStore {
    async fn fetch_kinds(&self, cursor: Option<&str>, _limit: usize) -> StoreResult<KindPage> {
        let index = match cursor {
            Some(c) => c
                .parse::<usize>()
                .map_err(|e| StoreError::Backend(e.to_string()))?,
            None => 0,
        };
        if self.fail_on_page == Some(index) {
            return Err(StoreError::Backend("metadata scan interrupted".into()));
        }
        let kinds = self.pages.get(index).cloned().unwrap_or_default();
        let next_cursor = (index + 1 < self.pages.len()).then(|| (index + 1).to_string());
        Ok(KindPage { kinds, next_cursor })
    }
}

/// Queue that records every add attempt.
#[derive(Default)]
pub struct RecordingQueue {
    pub attempts: Mutex<Vec<(PostTask, String)>>,
    pub fail: bool,
}

impl RecordingQueue {
    pub fn failing() -> Self {
        Self {
            attempts: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn attempts(&self) -> Vec<(PostTask, String)> {
        self.attempts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TaskQueue for RecordingQueue {
    async fn add(&self, task: PostTask, queue_name: &str) -> QueueResult<Task> {
        self.attempts
            .lock()
            .unwrap()
            .push((task.clone(), queue_name.to_string()));

        if self.fail {
            return Err(QueueError::Rejected {
                queue: queue_name.to_string(),
                reason: "quota exceeded".into(),
            });
        }

        Ok(Task {
            id: Uuid::new_v4(),
            queue_name: queue_name.to_string(),
            method: "POST".to_string(),
            path: task.path,
            payload: task.payload,
            created_at: Utc::now(),
        })
    }
}

/// Router wired to the given store and queue.
pub async fn app_with(
    store: FakeKindStore,
    queue: Arc<RecordingQueue>,
    config: BackupConfig,
) -> Router {
    let backup = BackupService::new(Arc::new(store), queue, config);
    routes().with_state(AppState::new(memory_pool().await, backup))
}

pub async fn send(app: Router, method: &str, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Decode a form-encoded task payload into ordered pairs.
pub fn decode_payload(payload: &str) -> Vec<(String, String)> {
    form_urlencoded::parse(payload.as_bytes())
        .into_owned()
        .collect()
}

pub fn values<'a>(pairs: &'a [(String, String)], key: &str) -> Vec<&'a str> {
    pairs
        .iter()
        .filter(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
        .collect()
}
