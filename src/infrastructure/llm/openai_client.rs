use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{LlmClient, LlmClientError};
use crate::presentation::config::{LlmProvider, LlmSettings};

const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Chat-completions client for OpenAI, LM Studio and Azure OpenAI.
pub struct OpenAiCompatibleClient {
    client: Client,
    provider: LlmProvider,
    completions_url: String,
    api_key: String,
    model: String,
    max_tokens: usize,
    temperature: f32,
    json_response_format: bool,
}

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: usize,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl OpenAiCompatibleClient {
    pub fn completions_url(&self) -> &str {
        &self.completions_url
    }

    fn apply_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.provider {
            LlmProvider::Azure => request.header("api-key", &self.api_key),
            _ if self.api_key.is_empty() => request,
            _ => request.header("Authorization", format!("Bearer {}", self.api_key)),
        }
    }
}

#[async_trait]
impl LlmClient for OpenAiCompatibleClient {
    async fn complete(
        &self,
        system_prompt: &str,
        user_message: &str,
    ) -> Result<String, LlmClientError> {
        if self.provider.requires_api_key() && self.api_key.is_empty() {
            return Err(LlmClientError::NotConfigured(format!(
                "no API key configured for provider {}",
                self.provider
            )));
        }

        let request_body = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: user_message.to_string(),
                },
            ],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            response_format: self
                .json_response_format
                .then_some(ResponseFormat { kind: "json_object" }),
        };

        let request = self.client.post(&self.completions_url).json(&request_body);
        let response = self
            .apply_auth(request)
            .send()
            .await
            .map_err(|e| LlmClientError::ApiRequestFailed(e.to_string()))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(LlmClientError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(LlmClientError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let completion_response: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| LlmClientError::InvalidResponse(e.to_string()))?;

        completion_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| LlmClientError::InvalidResponse("empty choices".to_string()))
    }
}

pub fn create_llm_client(settings: &LlmSettings) -> Result<OpenAiCompatibleClient, LlmClientError> {
    let completions_url = match settings.provider {
        LlmProvider::OpenAi => format!(
            "{}/chat/completions",
            settings
                .base_url
                .as_deref()
                .unwrap_or(OPENAI_BASE_URL)
                .trim_end_matches('/')
        ),
        LlmProvider::LmStudio => {
            let base_url = settings.base_url.as_deref().ok_or_else(|| {
                LlmClientError::NotConfigured("base_url required for lmstudio provider".to_string())
            })?;
            format!("{}/chat/completions", base_url.trim_end_matches('/'))
        }
        LlmProvider::Azure => {
            let endpoint = settings.azure_endpoint.as_deref().ok_or_else(|| {
                LlmClientError::NotConfigured(
                    "azure_endpoint required for azure provider".to_string(),
                )
            })?;
            format!(
                "{}/openai/deployments/{}/chat/completions?api-version={}",
                endpoint.trim_end_matches('/'),
                settings.chat_model,
                settings.azure_api_version
            )
        }
    };

    let client = Client::builder()
        .timeout(Duration::from_secs(settings.request_timeout_secs))
        .build()
        .map_err(|e| LlmClientError::NotConfigured(format!("http client: {}", e)))?;

    Ok(OpenAiCompatibleClient {
        client,
        provider: settings.provider,
        completions_url,
        api_key: settings.api_key.clone(),
        model: settings.chat_model.clone(),
        max_tokens: settings.max_tokens,
        temperature: settings.temperature,
        json_response_format: settings.json_response_format,
    })
}
