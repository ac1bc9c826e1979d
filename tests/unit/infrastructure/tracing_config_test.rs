use prompt_separator::infrastructure::observability::{DEFAULT_LOG_FILTER, TracingConfig};
use prompt_separator::presentation::config::{Environment, LoggingSettings};

fn logging(enable_json: bool) -> LoggingSettings {
    LoggingSettings {
        level: "warn".to_string(),
        enable_json,
    }
}

#[test]
fn given_default_config_when_created_then_uses_default_filter() {
    let config = TracingConfig::default();

    assert_eq!(config.filter, DEFAULT_LOG_FILTER);
    assert!(!config.environment.is_empty());
}

#[test]
fn given_logging_settings_without_format_when_building_config_then_copies_settings() {
    let config = TracingConfig::with_log_format(&logging(true), Environment::Prod, None);

    assert_eq!(config.filter, "warn");
    assert!(config.json_format);
    assert_eq!(config.environment, "prod");
}

#[test]
fn given_json_log_format_when_building_config_then_overrides_settings() {
    let config = TracingConfig::with_log_format(&logging(false), Environment::Local, Some("JSON"));

    assert!(config.json_format);
}

#[test]
fn given_text_log_format_when_building_config_then_disables_json() {
    let config = TracingConfig::with_log_format(&logging(true), Environment::Local, Some("text"));

    assert!(!config.json_format);
}

#[test]
fn given_unknown_log_format_when_building_config_then_keeps_settings() {
    let config = TracingConfig::with_log_format(&logging(true), Environment::Local, Some("xml"));

    assert!(config.json_format);
}
