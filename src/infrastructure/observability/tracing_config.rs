use crate::presentation::config::{Environment, LoggingSettings};

pub const DEFAULT_LOG_FILTER: &str = "info,prompt_separator=debug,tower_http=debug";

/// `json` forces JSON output, `text` or `plain` forces plain lines.
pub const LOG_FORMAT_VAR: &str = "LOG_FORMAT";

/// Configuration for tracing initialization.
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
    pub filter: String,
}

impl TracingConfig {
    /// Settings-driven config. `LOG_FORMAT` overrides `logging.enable_json`.
    pub fn from_settings(settings: &LoggingSettings, environment: Environment) -> Self {
        let log_format = std::env::var(LOG_FORMAT_VAR).ok();
        Self::with_log_format(settings, environment, log_format.as_deref())
    }

    pub fn with_log_format(
        settings: &LoggingSettings,
        environment: Environment,
        log_format: Option<&str>,
    ) -> Self {
        Self {
            environment: environment.to_string(),
            json_format: parse_log_format(log_format).unwrap_or(settings.enable_json),
            filter: settings.level.clone(),
        }
    }
}

fn parse_log_format(value: Option<&str>) -> Option<bool> {
    match value?.trim().to_ascii_lowercase().as_str() {
        "json" => Some(true),
        "text" | "plain" | "pretty" => Some(false),
        _ => None,
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        let log_format = std::env::var(LOG_FORMAT_VAR).ok();
        Self {
            environment: Environment::from_env()
                .unwrap_or(Environment::Local)
                .to_string(),
            json_format: parse_log_format(log_format.as_deref()).unwrap_or(false),
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}
