use async_trait::async_trait;

use crate::domain::{SeparationWarning, SplitterResponse};

/// External capability that splits a blob into title, prompt and output.
/// Replies are untrusted and are validated by the engine.
#[async_trait]
pub trait SemanticSplitter: Send + Sync {
    async fn split(&self, text: &str) -> Result<SplitterResponse, SemanticSplitterError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SemanticSplitterError {
    #[error("splitter unavailable: {0}")]
    Unavailable(String),
    #[error("splitter transport failure: {0}")]
    TransportFailure(String),
    #[error("splitter response malformed: {0}")]
    ResponseMalformed(String),
}

impl From<SemanticSplitterError> for SeparationWarning {
    fn from(error: SemanticSplitterError) -> Self {
        match error {
            SemanticSplitterError::Unavailable(reason) => {
                SeparationWarning::SplitterUnavailable { reason }
            }
            SemanticSplitterError::TransportFailure(reason) => {
                SeparationWarning::SplitterTransportFailure { reason }
            }
            SemanticSplitterError::ResponseMalformed(reason) => {
                SeparationWarning::SplitterResponseMalformed { reason }
            }
        }
    }
}
