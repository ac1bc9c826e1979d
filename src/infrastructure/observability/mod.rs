mod init_tracing;
mod prompt_sanitizer;
mod request_id;
mod tracing_config;
mod tracing_warning_sink;

pub use init_tracing::init_tracing;
pub use prompt_sanitizer::sanitize_prompt;
pub use request_id::{REQUEST_ID_HEADER, RequestId, request_id_middleware};
pub use tracing_config::{DEFAULT_LOG_FILTER, LOG_FORMAT_VAR, TracingConfig};
pub use tracing_warning_sink::TracingWarningSink;
