use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::application::ports::{LlmClient, LlmClientError};

/// Canned chat-completion client for tests and offline runs.
pub struct MockLlmClient {
    reply: Option<String>,
    calls: AtomicUsize,
    last_user_message: Mutex<Option<String>>,
}

impl MockLlmClient {
    pub fn replying(content: impl Into<String>) -> Self {
        Self {
            reply: Some(content.into()),
            calls: AtomicUsize::new(0),
            last_user_message: Mutex::new(None),
        }
    }

    /// Every call fails with `ApiRequestFailed`.
    pub fn failing() -> Self {
        Self {
            reply: None,
            calls: AtomicUsize::new(0),
            last_user_message: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_user_message(&self) -> Option<String> {
        self.last_user_message
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(
        &self,
        _system_prompt: &str,
        user_message: &str,
    ) -> Result<String, LlmClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_user_message.lock() {
            *last = Some(user_message.to_string());
        }

        self.reply
            .clone()
            .ok_or_else(|| LlmClientError::ApiRequestFailed("mock failure".to_string()))
    }
}
