use std::sync::Arc;

use crate::application::ports::{LlmClientError, SemanticSplitter};
use crate::presentation::config::LlmSettings;

use super::{LlmSemanticSplitter, create_llm_client};

pub struct SplitterFactory;

impl SplitterFactory {
    /// Builds the LLM-backed splitter, or `None` when the provider needs an
    /// API key and none is configured.
    pub fn from_settings(
        settings: &LlmSettings,
    ) -> Result<Option<Arc<dyn SemanticSplitter>>, LlmClientError> {
        if settings.provider.requires_api_key() && settings.api_key.trim().is_empty() {
            tracing::info!(
                provider = %settings.provider,
                "No API key configured, semantic splitter disabled"
            );
            return Ok(None);
        }

        let client = create_llm_client(settings)?;
        tracing::info!(
            provider = %settings.provider,
            model = %settings.chat_model,
            "Semantic splitter enabled"
        );

        Ok(Some(Arc::new(LlmSemanticSplitter::new(Arc::new(client)))))
    }
}
