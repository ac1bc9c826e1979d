use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{
    LlmClient, LlmClientError, SemanticSplitter, SemanticSplitterError,
};
use crate::domain::SplitterResponse;

use super::splitter_prompt::{SPLITTER_SYSTEM_PROMPT, build_split_request};

/// Semantic splitter backed by a chat-completion model.
pub struct LlmSemanticSplitter<L: LlmClient + ?Sized> {
    llm_client: Arc<L>,
}

impl<L: LlmClient + ?Sized> LlmSemanticSplitter<L> {
    pub fn new(llm_client: Arc<L>) -> Self {
        Self { llm_client }
    }
}

#[async_trait]
impl<L: LlmClient + ?Sized> SemanticSplitter for LlmSemanticSplitter<L> {
    async fn split(&self, text: &str) -> Result<SplitterResponse, SemanticSplitterError> {
        let content = self
            .llm_client
            .complete(SPLITTER_SYSTEM_PROMPT, &build_split_request(text))
            .await
            .map_err(map_llm_error)?;

        parse_splitter_reply(&content)
    }
}

fn map_llm_error(error: LlmClientError) -> SemanticSplitterError {
    match error {
        LlmClientError::NotConfigured(reason) => SemanticSplitterError::Unavailable(reason),
        LlmClientError::ApiRequestFailed(reason) => SemanticSplitterError::TransportFailure(reason),
        LlmClientError::RateLimited => {
            SemanticSplitterError::TransportFailure("rate limited".to_string())
        }
        LlmClientError::InvalidResponse(reason) => SemanticSplitterError::ResponseMalformed(reason),
    }
}

/// Parses the model's reply content into a splitter response.
pub fn parse_splitter_reply(content: &str) -> Result<SplitterResponse, SemanticSplitterError> {
    let body = strip_code_fence(content.trim());

    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| {
        SemanticSplitterError::ResponseMalformed(format!("reply is not JSON: {}", e))
    })?;

    if !value.is_object() {
        return Err(SemanticSplitterError::ResponseMalformed(
            "reply is not a JSON object".to_string(),
        ));
    }

    serde_json::from_value(value).map_err(|e| {
        SemanticSplitterError::ResponseMalformed(format!("unexpected field types: {}", e))
    })
}

fn strip_code_fence(content: &str) -> &str {
    let Some(rest) = content.strip_prefix("```") else {
        return content;
    };

    // Drop the info string (e.g. `json`) on the opening fence line.
    let rest = match rest.find('\n') {
        Some(idx) => &rest[idx + 1..],
        None => rest,
    };

    rest.trim_end().strip_suffix("```").unwrap_or(rest).trim()
}
