use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::error::AppError;
use crate::models::Scan;
use crate::state::AppState;

/// GET /scan - one acquisition cycle on the attached reader
pub async fn scan(State(state): State<Arc<AppState>>) -> Result<Json<Scan>, AppError> {
    let scanner = state.scanner.clone().ok_or(AppError::ReaderUnavailable)?;

    // The driver blocks on bus I/O for the whole cycle; keep it off the
    // async workers, and hold the lock so scans never interleave.
    let uid = tokio::task::spawn_blocking(move || {
        scanner
            .lock()
            .map(|mut reader| reader.read_uid())
            .unwrap_or(None)
    })
    .await
    .map_err(|err| AppError::Internal(err.to_string()))?;

    match uid {
        Some(uid) => Ok(Json(Scan { uid })),
        None => Err(AppError::NoTag),
    }
}
