use crate::domain::SeparationWarning;

/// Caller-supplied channel for non-fatal separation warnings.
pub trait WarningSink: Send + Sync {
    fn report(&self, warning: &SeparationWarning);
}

/// Discards every warning.
pub struct NoopWarningSink;

impl WarningSink for NoopWarningSink {
    fn report(&self, _warning: &SeparationWarning) {}
}
