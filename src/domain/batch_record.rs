use super::{SeparationResult, SeparationWarning};

/// One batch row: the result plus the position of its input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchRecord {
    pub index: usize,
    pub result: SeparationResult,
    pub warnings: Vec<SeparationWarning>,
}
