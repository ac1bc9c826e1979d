mod batch;
mod error_response;
mod health;
mod history;
mod separate;
mod stats;

pub use batch::{
    BatchItem, BatchRequest, BatchResponse, CSV_EXPORT_FILENAME, batch_csv_handler,
    batch_handler, csv_columns_handler,
};
pub use error_response::ErrorResponse;
pub use health::health_handler;
pub use history::{clear_history_handler, list_history_handler};
pub use separate::{SeparateRequest, SeparateResponse, separate_file_handler, separate_handler};
pub use stats::stats_handler;
