mod batch_record;
mod separation_outcome;
mod separation_result;
mod separation_warning;
mod splitter_response;
mod text_stats;

pub use batch_record::BatchRecord;
pub use separation_outcome::{SeparationOutcome, SeparationSource};
pub use separation_result::{SeparationResult, UNTITLED_TITLE};
pub use separation_warning::SeparationWarning;
pub use splitter_response::SplitterResponse;
pub use text_stats::TextStats;
