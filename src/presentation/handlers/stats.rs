use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;

use crate::application::services::count_text_stats;

#[derive(Deserialize)]
pub struct StatsRequest {
    pub text: String,
}

pub async fn stats_handler(Json(request): Json<StatsRequest>) -> impl IntoResponse {
    (StatusCode::OK, Json(count_text_stats(&request.text)))
}
