#[derive(Debug, thiserror::Error)]
pub enum TabularError {
    #[error("csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("unknown column '{column}', available: {}", .available.join(", "))]
    UnknownColumn {
        column: String,
        available: Vec<String>,
    },
    #[error("csv has no header row")]
    MissingHeader,
    #[error("input is not valid UTF-8: {0}")]
    InvalidUtf8(String),
    #[error("csv write failed: {0}")]
    Write(String),
}
