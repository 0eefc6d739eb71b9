//! `/backup` — enqueue a datastore backup of every user kind.

use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{errors::AppError, state::AppState};

/// Any method on `/backup`; the request body is ignored.
///
/// Replies `200 OK` once the queue has accepted the job, `500` with the bare
/// status text if listing kinds or enqueueing failed.
pub async fn trigger_backup(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    state.backup.trigger().await?;
    Ok((StatusCode::OK, "OK"))
}
