use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::WarningSink;
use crate::application::services::count_text_stats;
use crate::domain::{SeparationOutcome, SeparationSource, SeparationWarning, TextStats};
use crate::infrastructure::observability::{TracingWarningSink, sanitize_prompt};
use crate::infrastructure::tabular::decode_text_upload;
use crate::presentation::handlers::error_response::error_response;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct SeparateRequest {
    pub text: String,
}

#[derive(Serialize)]
pub struct WarningView {
    pub kind: &'static str,
    pub message: String,
}

impl From<&SeparationWarning> for WarningView {
    fn from(warning: &SeparationWarning) -> Self {
        Self {
            kind: warning.kind(),
            message: warning.message(),
        }
    }
}

#[derive(Serialize)]
pub struct SeparateResponse {
    pub title: String,
    pub prompt: String,
    pub output: String,
    pub prompt_stats: TextStats,
    pub output_stats: TextStats,
    pub source: SeparationSource,
    pub warnings: Vec<WarningView>,
}

impl From<SeparationOutcome> for SeparateResponse {
    fn from(outcome: SeparationOutcome) -> Self {
        let warnings = outcome.warnings.iter().map(WarningView::from).collect();
        let result = outcome.result;
        Self {
            prompt_stats: count_text_stats(&result.prompt),
            output_stats: count_text_stats(&result.output),
            title: result.title,
            prompt: result.prompt,
            output: result.output,
            source: outcome.source,
            warnings,
        }
    }
}

async fn separate_and_record(state: &AppState, text: &str) -> SeparateResponse {
    let outcome = state
        .engine
        .separate_with_outcome(text, state.splitter())
        .await;

    if outcome.is_degraded() {
        for warning in &outcome.warnings {
            TracingWarningSink.report(warning);
        }
    }

    if !text.is_empty() {
        let entry = state
            .history
            .write()
            .await
            .record(text, outcome.result.title.clone());
        tracing::debug!(entry = entry.number, "Recorded history entry");
    }

    tracing::info!(
        source = %outcome.source,
        degraded = outcome.is_degraded(),
        warnings = outcome.warnings.len(),
        "Text separated"
    );
    SeparateResponse::from(outcome)
}

#[tracing::instrument(skip(state, request))]
pub async fn separate_handler(
    State(state): State<AppState>,
    Json(request): Json<SeparateRequest>,
) -> impl IntoResponse {
    tracing::debug!(text = %sanitize_prompt(&request.text), "Separating pasted text");

    let response = separate_and_record(&state, &request.text).await;
    (StatusCode::OK, Json(response))
}

#[tracing::instrument(skip(state, multipart))]
pub async fn separate_file_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let field = match multipart.next_field().await {
        Ok(Some(f)) => f,
        Ok(None) => {
            tracing::warn!("Separate-file request with no file");
            return error_response(StatusCode::BAD_REQUEST, "No file uploaded");
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to read multipart");
            return error_response(
                StatusCode::BAD_REQUEST,
                format!("Failed to read multipart: {}", e),
            );
        }
    };

    let filename = field.file_name().unwrap_or("unknown").to_string();
    let data = match field.bytes().await {
        Ok(d) => d,
        Err(e) => {
            tracing::error!(error = %e, filename = %filename, "Failed to read file data");
            return error_response(
                StatusCode::BAD_REQUEST,
                format!("Failed to read file: {}", e),
            );
        }
    };

    let text = match decode_text_upload(&data) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(error = %e, filename = %filename, "Rejected text upload");
            return error_response(StatusCode::BAD_REQUEST, e.to_string());
        }
    };

    tracing::debug!(filename = %filename, size = data.len(), "Separating uploaded file");
    let response = separate_and_record(&state, &text).await;
    (StatusCode::OK, Json(response)).into_response()
}
