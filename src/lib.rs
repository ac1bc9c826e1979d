pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use application::ports::{SemanticSplitter, SemanticSplitterError, WarningSink};
pub use application::services::{
    BatchProcessor, SeparationEngine, SeparationPolicy, count_text_stats,
};
pub use domain::{
    BatchRecord, SeparationOutcome, SeparationResult, SeparationSource, SeparationWarning,
    SplitterResponse, TextStats, UNTITLED_TITLE,
};
