use crate::application::ports::WarningSink;
use crate::domain::SeparationWarning;

/// Reports separation warnings as `WARN` events.
pub struct TracingWarningSink;

impl WarningSink for TracingWarningSink {
    fn report(&self, warning: &SeparationWarning) {
        tracing::warn!(kind = warning.kind(), "{}", warning);
    }
}
