//! Route table for the backup trigger.
//!
//! - `/backup`  (any method) — enqueue one backup job
//! - `GET /healthz`         — liveness
//! - `GET /readyz`          — readiness (database ping)

use crate::{
    handlers::{
        backup_handlers::trigger_backup,
        health_handlers::{healthz, readyz},
    },
    state::AppState,
};
use axum::{
    Router,
    routing::{any, get},
};

/// Path the platform cron (or an operator) hits to start a backup.
pub const BACKUP_ROUTE: &str = "/backup";

/// Build the router. State is attached by the caller with `with_state`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .route(BACKUP_ROUTE, any(trigger_backup))
}
