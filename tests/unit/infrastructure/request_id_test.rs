use axum::http::{HeaderMap, HeaderValue};

use prompt_separator::infrastructure::observability::{REQUEST_ID_HEADER, RequestId};

fn headers_with(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(REQUEST_ID_HEADER, HeaderValue::from_str(value).unwrap());
    headers
}

#[test]
fn given_printable_request_id_when_resolving_then_keeps_it() {
    let request_id = RequestId::from_headers(&headers_with("abc-123"));

    assert_eq!(request_id.as_str(), "abc-123");
}

#[test]
fn given_missing_request_id_when_resolving_then_generates_uuid() {
    let request_id = RequestId::from_headers(&HeaderMap::new());

    assert!(uuid::Uuid::parse_str(request_id.as_str()).is_ok());
}

#[test]
fn given_oversized_request_id_when_resolving_then_replaces_it() {
    let long = "x".repeat(200);

    let request_id = RequestId::from_headers(&headers_with(&long));

    assert_ne!(request_id.as_str(), long);
    assert!(uuid::Uuid::parse_str(request_id.as_str()).is_ok());
}

#[test]
fn given_request_id_with_spaces_when_resolving_then_replaces_it() {
    let request_id = RequestId::from_headers(&headers_with("two words"));

    assert_ne!(request_id.as_str(), "two words");
}
