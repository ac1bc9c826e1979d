mod batch_processor;
mod separation_engine;
mod text_statistics;

pub use batch_processor::BatchProcessor;
pub use separation_engine::{
    DEFAULT_BOUNDARY, DEFAULT_MIN_RETENTION_PERCENT, DEFAULT_SPLITTER_TIMEOUT, SeparationEngine,
    SeparationPolicy,
};
pub use text_statistics::{count_text_stats, count_words};
