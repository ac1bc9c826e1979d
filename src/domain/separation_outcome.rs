use std::fmt;

use serde::Serialize;

use super::{SeparationResult, SeparationWarning};

/// Which path produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeparationSource {
    Empty,
    Splitter,
    Fallback,
}

impl SeparationSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeparationSource::Empty => "empty",
            SeparationSource::Splitter => "splitter",
            SeparationSource::Fallback => "fallback",
        }
    }
}

impl fmt::Display for SeparationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparationOutcome {
    pub result: SeparationResult,
    pub warnings: Vec<SeparationWarning>,
    pub source: SeparationSource,
}

impl SeparationOutcome {
    pub fn is_degraded(&self) -> bool {
        !self.warnings.is_empty()
    }
}
