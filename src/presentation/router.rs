use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    batch_csv_handler, batch_handler, clear_history_handler, csv_columns_handler, health_handler,
    list_history_handler, separate_file_handler, separate_handler, stats_handler,
};
use crate::presentation::state::AppState;

/// Upper bound for pasted text, uploaded files and CSV bodies.
pub const MAX_BODY_BYTES: usize = 20 * 1024 * 1024;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/v1/separate", post(separate_handler))
        .route("/api/v1/separate/file", post(separate_file_handler))
        .route("/api/v1/batch", post(batch_handler))
        .route("/api/v1/batch/csv", post(batch_csv_handler))
        .route("/api/v1/csv/columns", post(csv_columns_handler))
        .route("/api/v1/stats", post(stats_handler))
        .route(
            "/api/v1/history",
            get(list_history_handler).delete(clear_history_handler),
        )
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
