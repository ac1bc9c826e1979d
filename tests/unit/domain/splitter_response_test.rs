use prompt_separator::domain::SplitterResponse;

#[test]
fn given_json_with_null_field_when_deserializing_then_field_is_absent() {
    let response: SplitterResponse =
        serde_json::from_str(r#"{"title": "T", "prompt": "p", "output": null}"#).unwrap();

    assert_eq!(response.output, None);
    assert_eq!(response.missing_fields(), vec!["output"]);
}

#[test]
fn given_json_without_fields_when_deserializing_then_reports_all_missing() {
    let response: SplitterResponse = serde_json::from_str("{}").unwrap();

    assert_eq!(response.missing_fields(), vec!["title", "prompt", "output"]);
}

#[test]
fn given_extra_fields_when_deserializing_then_ignores_them() {
    let response: SplitterResponse = serde_json::from_str(
        r#"{"title": "T", "prompt": "p", "output": "o", "confidence": 0.4}"#,
    )
    .unwrap();

    assert_eq!(
        response,
        SplitterResponse::new(Some("T"), Some("p"), Some("o"))
    );
}
