use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::presentation::state::{AppState, HistoryEntry};

#[derive(Serialize)]
pub struct HistoryResponse {
    pub entries: Vec<HistoryEntry>,
}

#[derive(Serialize)]
pub struct ClearHistoryResponse {
    pub cleared: usize,
}

pub async fn list_history_handler(State(state): State<AppState>) -> impl IntoResponse {
    let entries = state.history.read().await.entries();
    (StatusCode::OK, Json(HistoryResponse { entries }))
}

pub async fn clear_history_handler(State(state): State<AppState>) -> impl IntoResponse {
    let cleared = state.history.write().await.clear();
    tracing::info!(cleared = cleared, "History cleared");
    (StatusCode::OK, Json(ClearHistoryResponse { cleared }))
}
