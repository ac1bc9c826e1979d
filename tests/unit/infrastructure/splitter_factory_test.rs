use prompt_separator::infrastructure::llm::SplitterFactory;
use prompt_separator::presentation::config::{LlmProvider, LlmSettings};

fn settings(provider: LlmProvider, api_key: &str, base_url: Option<&str>) -> LlmSettings {
    LlmSettings {
        provider,
        api_key: api_key.to_string(),
        base_url: base_url.map(String::from),
        azure_endpoint: None,
        azure_api_version: "2024-02-01".to_string(),
        chat_model: "gpt-4o-mini".to_string(),
        max_tokens: 1024,
        temperature: 0.0,
        request_timeout_secs: 30,
        json_response_format: true,
    }
}

#[test]
fn given_openai_without_api_key_when_building_splitter_then_returns_none() {
    let splitter = SplitterFactory::from_settings(&settings(LlmProvider::OpenAi, "  ", None));

    assert!(splitter.unwrap().is_none());
}

#[test]
fn given_openai_with_api_key_when_building_splitter_then_returns_splitter() {
    let splitter = SplitterFactory::from_settings(&settings(LlmProvider::OpenAi, "sk-test", None));

    assert!(splitter.unwrap().is_some());
}

#[test]
fn given_lmstudio_without_api_key_when_building_splitter_then_returns_splitter() {
    let splitter = SplitterFactory::from_settings(&settings(
        LlmProvider::LmStudio,
        "",
        Some("http://localhost:1234/v1"),
    ));

    assert!(splitter.unwrap().is_some());
}

#[test]
fn given_azure_without_endpoint_when_building_splitter_then_fails() {
    let splitter = SplitterFactory::from_settings(&settings(LlmProvider::Azure, "key", None));

    assert!(splitter.is_err());
}
