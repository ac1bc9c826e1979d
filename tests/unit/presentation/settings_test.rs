use std::time::Duration;

use prompt_separator::presentation::config::{Environment, LlmProvider, Settings};

fn build(overrides: &[(&str, &str)]) -> Settings {
    let mut builder = Settings::builder(Environment::Test).unwrap();
    for (key, value) in overrides {
        builder = builder.set_override(*key, *value).unwrap();
    }
    builder.build().unwrap().try_deserialize().unwrap()
}

#[test]
fn given_no_overrides_when_building_settings_then_uses_defaults() {
    let settings = build(&[]);

    assert_eq!(settings.server.port, 3000);
    assert_eq!(settings.llm.provider, LlmProvider::OpenAi);
    assert_eq!(settings.separation.min_retention_percent, 90);
    assert_eq!(settings.separation.boundary, "\n\n");
    assert_eq!(settings.history.max_entries, 100);
    assert!(settings.validate().is_ok());
}

#[test]
fn given_separation_settings_when_building_policy_then_copies_values() {
    let settings = build(&[
        ("separation.min_retention_percent", "75"),
        ("separation.splitter_timeout_secs", "5"),
    ]);

    let policy = settings.separation.policy();

    assert_eq!(policy.min_retention_percent, 75);
    assert_eq!(policy.splitter_timeout, Duration::from_secs(5));
}

#[test]
fn given_lmstudio_provider_when_building_settings_then_parses_provider() {
    let settings = build(&[
        ("llm.provider", "lmstudio"),
        ("llm.base_url", "http://localhost:1234/v1"),
    ]);

    assert_eq!(settings.llm.provider, LlmProvider::LmStudio);
    assert!(!settings.llm.provider.requires_api_key());
    assert_eq!(
        settings.llm.base_url.as_deref(),
        Some("http://localhost:1234/v1")
    );
}

#[test]
fn given_retention_above_hundred_when_validating_then_fails() {
    let settings = build(&[("separation.min_retention_percent", "120")]);

    assert!(settings.validate().is_err());
}

#[test]
fn given_zero_concurrency_when_validating_then_fails() {
    let settings = build(&[("separation.batch_concurrency", "0")]);

    assert!(settings.validate().is_err());
}

#[test]
fn given_api_key_when_debug_printing_then_redacts_it() {
    let settings = build(&[("llm.api_key", "sk-very-secret")]);

    let printed = format!("{:?}", settings.llm);

    assert!(!printed.contains("sk-very-secret"));
    assert!(printed.contains("[REDACTED]"));
}

#[test]
fn given_zero_splitter_timeout_when_validating_then_fails() {
    let settings = build(&[("separation.splitter_timeout_secs", "0")]);

    let error = settings.validate().unwrap_err();

    assert!(error.to_string().contains("splitter_timeout_secs"));
}
