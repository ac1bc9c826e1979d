use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub splitter_configured: bool,
    pub min_retention_percent: u32,
}

pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        splitter_configured: state.splitter.is_some(),
        min_retention_percent: state.engine.policy().min_retention_percent,
    })
}
