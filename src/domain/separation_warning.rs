use std::fmt;

use serde::Serialize;

/// Non-fatal notice that the engine degraded to the heuristic split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SeparationWarning {
    SplitterUnavailable {
        reason: String,
    },
    SplitterTransportFailure {
        reason: String,
    },
    SplitterResponseMalformed {
        reason: String,
    },
    SplitterIntegrityRejected {
        original_words: usize,
        recovered_words: usize,
        min_retention_percent: u32,
    },
}

impl SeparationWarning {
    pub fn kind(&self) -> &'static str {
        match self {
            SeparationWarning::SplitterUnavailable { .. } => "splitter_unavailable",
            SeparationWarning::SplitterTransportFailure { .. } => "splitter_transport_failure",
            SeparationWarning::SplitterResponseMalformed { .. } => "splitter_response_malformed",
            SeparationWarning::SplitterIntegrityRejected { .. } => "splitter_integrity_rejected",
        }
    }

    pub fn message(&self) -> String {
        match self {
            SeparationWarning::SplitterUnavailable { reason } => {
                format!("Semantic splitter unavailable ({}). Using basic split instead.", reason)
            }
            SeparationWarning::SplitterTransportFailure { reason } => {
                format!("Semantic splitter request failed ({}). Using basic split instead.", reason)
            }
            SeparationWarning::SplitterResponseMalformed { reason } => {
                format!("Failed to parse splitter response ({}). Using basic split instead.", reason)
            }
            SeparationWarning::SplitterIntegrityRejected {
                original_words,
                recovered_words,
                ..
            } => format!(
                "Content was modified during processing ({} of {} words kept). Using basic split instead.",
                recovered_words, original_words
            ),
        }
    }
}

impl fmt::Display for SeparationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
