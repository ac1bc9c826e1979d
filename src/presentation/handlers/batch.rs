use axum::Json;
use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::WarningSink;
use crate::domain::{BatchRecord, SeparationResult};
use crate::infrastructure::observability::{TracingWarningSink, sanitize_prompt};
use crate::infrastructure::tabular::{
    TabularError, read_csv_column, read_csv_columns, write_results_csv,
};
use crate::presentation::handlers::error_response::error_response;
use crate::presentation::handlers::separate::WarningView;
use crate::presentation::state::AppState;

pub const CSV_EXPORT_FILENAME: &str = "processed_conversations.csv";

#[derive(Deserialize)]
pub struct BatchRequest {
    pub texts: Vec<String>,
}

#[derive(Serialize)]
pub struct BatchItem {
    pub index: usize,
    pub title: String,
    pub prompt: String,
    pub output: String,
    pub warnings: Vec<WarningView>,
}

impl From<BatchRecord> for BatchItem {
    fn from(record: BatchRecord) -> Self {
        Self {
            index: record.index,
            warnings: record.warnings.iter().map(WarningView::from).collect(),
            title: record.result.title,
            prompt: record.result.prompt,
            output: record.result.output,
        }
    }
}

#[derive(Serialize)]
pub struct BatchResponse {
    pub results: Vec<BatchItem>,
}

#[derive(Deserialize)]
pub struct CsvQuery {
    pub column: Option<String>,
}

#[derive(Serialize)]
pub struct ColumnsResponse {
    pub columns: Vec<String>,
}

async fn run_batch(state: &AppState, texts: &[String]) -> Vec<BatchRecord> {
    let records = state
        .batch_processor
        .process_records(texts, state.splitter())
        .await;

    for (record, text) in records.iter().zip(texts).filter(|(r, _)| !r.warnings.is_empty()) {
        tracing::debug!(
            index = record.index,
            text = %sanitize_prompt(text),
            "Batch item degraded"
        );
        for warning in &record.warnings {
            TracingWarningSink.report(warning);
        }
    }

    records
}

#[tracing::instrument(skip(state, request), fields(total = request.texts.len()))]
pub async fn batch_handler(
    State(state): State<AppState>,
    Json(request): Json<BatchRequest>,
) -> impl IntoResponse {
    let records = run_batch(&state, &request.texts).await;
    let results = records.into_iter().map(BatchItem::from).collect();

    (StatusCode::OK, Json(BatchResponse { results }))
}

/// Separates every cell of one CSV column and returns a `Title,Prompt,Output` CSV.
#[tracing::instrument(skip(state, query, body), fields(size = body.len()))]
pub async fn batch_csv_handler(
    State(state): State<AppState>,
    Query(query): Query<CsvQuery>,
    body: Bytes,
) -> impl IntoResponse {
    let column = match query.column {
        Some(column) => column,
        None => match read_csv_columns(&body) {
            Ok(columns) if columns.len() == 1 => columns[0].clone(),
            Ok(columns) => {
                return error_response(
                    StatusCode::BAD_REQUEST,
                    format!(
                        "column query parameter required, available: {}",
                        columns.join(", ")
                    ),
                );
            }
            Err(e) => return tabular_error_response(e),
        },
    };

    let texts = match read_csv_column(&body, &column) {
        Ok(texts) => texts,
        Err(e) => return tabular_error_response(e),
    };

    let records = run_batch(&state, &texts).await;
    let results: Vec<SeparationResult> = records.into_iter().map(|r| r.result).collect();

    match write_results_csv(&results) {
        Ok(csv) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", CSV_EXPORT_FILENAME),
                ),
            ],
            csv,
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to write result csv");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

pub async fn csv_columns_handler(body: Bytes) -> impl IntoResponse {
    match read_csv_columns(&body) {
        Ok(columns) => (StatusCode::OK, Json(ColumnsResponse { columns })).into_response(),
        Err(e) => tabular_error_response(e),
    }
}

fn tabular_error_response(error: TabularError) -> axum::response::Response {
    tracing::warn!(error = %error, "Rejected csv input");
    error_response(StatusCode::BAD_REQUEST, error.to_string())
}
