use prompt_separator::infrastructure::observability::sanitize_prompt;

#[test]
fn given_empty_text_when_sanitizing_then_returns_empty_marker() {
    assert_eq!(sanitize_prompt(""), "[EMPTY]");
    assert_eq!(sanitize_prompt(" \n\n "), "[EMPTY]");
}

#[test]
fn given_multiline_text_when_sanitizing_then_collapses_to_one_line() {
    assert_eq!(sanitize_prompt("Question?\n\nAnswer."), "Question? Answer.");
}

#[test]
fn given_long_text_when_sanitizing_then_truncates_with_total_length() {
    let text = "a".repeat(150);

    let result = sanitize_prompt(&text);

    assert!(result.starts_with(&"a".repeat(80)));
    assert!(result.ends_with("... (150 chars total)"));
}

#[test]
fn given_long_multibyte_text_when_sanitizing_then_does_not_split_characters() {
    let text = "é".repeat(120);

    let result = sanitize_prompt(&text);

    assert!(result.starts_with(&"é".repeat(80)));
    assert!(result.contains("(120 chars total)"));
}

#[test]
fn given_bearer_token_when_sanitizing_then_redacts_token() {
    let result = sanitize_prompt("Authorization: Bearer abc123xyz");

    assert_eq!(result, "Authorization: Bearer [REDACTED]");
}

#[test]
fn given_openai_key_when_sanitizing_then_redacts_key() {
    let result = sanitize_prompt("my key is sk-proj-abcdef123456 please");

    assert_eq!(result, "my key is sk-[REDACTED] please");
}

#[test]
fn given_key_assignment_when_sanitizing_then_redacts_value() {
    let result = sanitize_prompt("call it with api_key=secret123 now");

    assert_eq!(result, "call it with api_key=[REDACTED] now");
}
