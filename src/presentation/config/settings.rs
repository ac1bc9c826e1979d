use std::fmt;
use std::time::Duration;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File};
use serde::Deserialize;

use super::Environment;
use crate::application::services::SeparationPolicy;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub separation: SeparationSettings,
    pub history: HistorySettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    #[serde(rename = "openai")]
    OpenAi,
    #[serde(rename = "lmstudio")]
    LmStudio,
    Azure,
}

impl LlmProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            LlmProvider::OpenAi => "openai",
            LlmProvider::LmStudio => "lmstudio",
            LlmProvider::Azure => "azure",
        }
    }

    /// Local LM Studio servers accept unauthenticated requests.
    pub fn requires_api_key(&self) -> bool {
        !matches!(self, LlmProvider::LmStudio)
    }
}

impl fmt::Display for LlmProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Clone, Deserialize)]
pub struct LlmSettings {
    pub provider: LlmProvider,
    pub api_key: String,
    pub base_url: Option<String>,
    pub azure_endpoint: Option<String>,
    pub azure_api_version: String,
    pub chat_model: String,
    pub max_tokens: usize,
    pub temperature: f32,
    pub request_timeout_secs: u64,
    pub json_response_format: bool,
}

impl fmt::Debug for LlmSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmSettings")
            .field("provider", &self.provider)
            .field("api_key", &if self.api_key.is_empty() { "" } else { "[REDACTED]" })
            .field("base_url", &self.base_url)
            .field("azure_endpoint", &self.azure_endpoint)
            .field("chat_model", &self.chat_model)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("json_response_format", &self.json_response_format)
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeparationSettings {
    pub min_retention_percent: u32,
    pub boundary: String,
    pub splitter_timeout_secs: u64,
    pub batch_concurrency: usize,
}

impl SeparationSettings {
    pub fn policy(&self) -> SeparationPolicy {
        SeparationPolicy {
            min_retention_percent: self.min_retention_percent,
            boundary: self.boundary.clone(),
            splitter_timeout: Duration::from_secs(self.splitter_timeout_secs),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct HistorySettings {
    pub max_entries: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid setting: {0}")]
    Invalid(String),
}

impl Settings {
    /// Defaults, then `appsettings.{environment}` if present, then `APP__*`
    /// environment variables (e.g. `APP__LLM__API_KEY`). `OPENAI_API_KEY` is
    /// honoured as the default API key.
    pub fn load(environment: Environment) -> Result<Self, SettingsError> {
        let settings: Settings = Self::builder(environment)?.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn builder(environment: Environment) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Ok(Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("llm.provider", "openai")?
            .set_default(
                "llm.api_key",
                std::env::var("OPENAI_API_KEY").unwrap_or_default(),
            )?
            .set_default("llm.azure_api_version", "2024-02-01")?
            .set_default("llm.chat_model", "gpt-4o-mini")?
            .set_default("llm.max_tokens", 4096)?
            .set_default("llm.temperature", 0.0)?
            .set_default("llm.request_timeout_secs", 60)?
            .set_default("llm.json_response_format", true)?
            .set_default("separation.min_retention_percent", 90)?
            .set_default("separation.boundary", "\n\n")?
            .set_default("separation.splitter_timeout_secs", 60)?
            .set_default("separation.batch_concurrency", 4)?
            .set_default("history.max_entries", 100)?
            .set_default("logging.level", crate::infrastructure::observability::DEFAULT_LOG_FILTER)?
            .set_default("logging.enable_json", false)?
            .add_source(File::with_name(&environment.config_file_stem()).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            ))
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.separation.min_retention_percent > 100 {
            return Err(SettingsError::Invalid(format!(
                "separation.min_retention_percent must be at most 100, got {}",
                self.separation.min_retention_percent
            )));
        }
        if self.separation.splitter_timeout_secs == 0 {
            return Err(SettingsError::Invalid(
                "separation.splitter_timeout_secs must be at least 1".to_string(),
            ));
        }
        if self.separation.batch_concurrency == 0 {
            return Err(SettingsError::Invalid(
                "separation.batch_concurrency must be at least 1".to_string(),
            ));
        }
        if self.history.max_entries == 0 {
            return Err(SettingsError::Invalid(
                "history.max_entries must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
