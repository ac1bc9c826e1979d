use std::time::Duration;

use crate::application::ports::{SemanticSplitter, SemanticSplitterError, WarningSink};
use crate::application::services::count_words;
use crate::domain::{
    SeparationOutcome, SeparationResult, SeparationSource, SeparationWarning, SplitterResponse,
    UNTITLED_TITLE,
};

pub const DEFAULT_MIN_RETENTION_PERCENT: u32 = 90;
pub const DEFAULT_BOUNDARY: &str = "\n\n";
pub const DEFAULT_SPLITTER_TIMEOUT: Duration = Duration::from_secs(60);

/// Tunables for the acceptance gate and the heuristic fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparationPolicy {
    /// Minimum share of the input's words a splitter reply must keep.
    pub min_retention_percent: u32,
    /// Delimiter whose first occurrence separates prompt from output.
    pub boundary: String,
    pub splitter_timeout: Duration,
}

impl Default for SeparationPolicy {
    fn default() -> Self {
        Self {
            min_retention_percent: DEFAULT_MIN_RETENTION_PERCENT,
            boundary: DEFAULT_BOUNDARY.to_string(),
            splitter_timeout: DEFAULT_SPLITTER_TIMEOUT,
        }
    }
}

/// Stateless orchestrator: tries the semantic splitter, validates its reply,
/// and degrades to the blank-line heuristic on any failure.
#[derive(Debug, Clone, Default)]
pub struct SeparationEngine {
    policy: SeparationPolicy,
}

impl SeparationEngine {
    pub fn new(policy: SeparationPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &SeparationPolicy {
        &self.policy
    }

    /// Separates `text`, forwarding every warning to `sink`. Never fails.
    pub async fn separate(
        &self,
        text: &str,
        splitter: Option<&dyn SemanticSplitter>,
        sink: &dyn WarningSink,
    ) -> SeparationResult {
        let outcome = self.separate_with_outcome(text, splitter).await;
        for warning in &outcome.warnings {
            sink.report(warning);
        }
        outcome.result
    }

    pub async fn separate_with_outcome(
        &self,
        text: &str,
        splitter: Option<&dyn SemanticSplitter>,
    ) -> SeparationOutcome {
        if text.is_empty() {
            return SeparationOutcome {
                result: SeparationResult::empty(),
                warnings: Vec::new(),
                source: SeparationSource::Empty,
            };
        }

        let mut warnings = Vec::new();

        match splitter {
            Some(splitter) => match self.request_split(text, splitter).await {
                Ok(response) => match self.accept(text, response) {
                    Ok(result) => {
                        tracing::debug!(title = %result.title, "Splitter response accepted");
                        return SeparationOutcome {
                            result,
                            warnings,
                            source: SeparationSource::Splitter,
                        };
                    }
                    Err(warning) => warnings.push(warning),
                },
                Err(error) => warnings.push(error.into()),
            },
            None => tracing::debug!("No semantic splitter configured, using fallback split"),
        }

        for warning in &warnings {
            tracing::debug!(
                kind = warning.kind(),
                input_chars = text.chars().count(),
                "{}",
                warning
            );
        }

        SeparationOutcome {
            result: self.fallback_split(text),
            warnings,
            source: SeparationSource::Fallback,
        }
    }

    /// Splits on the first occurrence of the boundary, trimming both halves.
    pub fn fallback_split(&self, text: &str) -> SeparationResult {
        let boundary = self.policy.boundary.as_str();
        if boundary.is_empty() {
            return SeparationResult::untitled(text.trim(), "");
        }

        match text.split_once(boundary) {
            Some((prompt, output)) => SeparationResult::untitled(prompt.trim(), output.trim()),
            None => SeparationResult::untitled(text.trim(), ""),
        }
    }

    async fn request_split(
        &self,
        text: &str,
        splitter: &dyn SemanticSplitter,
    ) -> Result<SplitterResponse, SemanticSplitterError> {
        let timeout = self.policy.splitter_timeout;
        match tokio::time::timeout(timeout, splitter.split(text)).await {
            Ok(reply) => reply,
            Err(_) => Err(SemanticSplitterError::TransportFailure(format!(
                "timed out after {:?}",
                timeout
            ))),
        }
    }

    fn accept(
        &self,
        text: &str,
        response: SplitterResponse,
    ) -> Result<SeparationResult, SeparationWarning> {
        let missing = response.missing_fields();
        let SplitterResponse {
            title: Some(title),
            prompt: Some(prompt),
            output: Some(output),
        } = response
        else {
            return Err(SeparationWarning::SplitterResponseMalformed {
                reason: format!("missing fields: {}", missing.join(", ")),
            });
        };

        let original_words = count_words(text);
        let recovered_words = count_words(&prompt) + count_words(&output);
        if !self.retains_enough(original_words, recovered_words) {
            return Err(SeparationWarning::SplitterIntegrityRejected {
                original_words,
                recovered_words,
                min_retention_percent: self.policy.min_retention_percent,
            });
        }

        let title = if title.trim().is_empty() {
            UNTITLED_TITLE.to_string()
        } else {
            title
        };

        Ok(SeparationResult::new(title, prompt, output))
    }

    fn retains_enough(&self, original_words: usize, recovered_words: usize) -> bool {
        let recovered = recovered_words as u128 * 100;
        let required = original_words as u128 * u128::from(self.policy.min_retention_percent);
        recovered >= required
    }
}
