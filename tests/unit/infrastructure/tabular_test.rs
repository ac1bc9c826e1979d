use prompt_separator::domain::SeparationResult;
use prompt_separator::infrastructure::tabular::{
    TabularError, decode_text_upload, read_csv_column, read_csv_columns, write_results_csv,
};

const CONVERSATIONS_CSV: &str =
    "id,conversation\n1,\"What is 2+2?\n\n4\"\n2,Just a prompt\n3,\n";

#[test]
fn given_csv_when_listing_columns_then_returns_headers_in_order() {
    let columns = read_csv_columns(CONVERSATIONS_CSV.as_bytes()).unwrap();

    assert_eq!(columns, vec!["id", "conversation"]);
}

#[test]
fn given_csv_when_reading_column_then_returns_cells_in_row_order() {
    let cells = read_csv_column(CONVERSATIONS_CSV.as_bytes(), "conversation").unwrap();

    assert_eq!(cells, vec!["What is 2+2?\n\n4", "Just a prompt", ""]);
}

#[test]
fn given_bom_prefixed_csv_when_reading_column_then_matches_first_header() {
    let data = "\u{feff}text\nhello\n";

    let cells = read_csv_column(data.as_bytes(), "text").unwrap();

    assert_eq!(cells, vec!["hello"]);
}

#[test]
fn given_unknown_column_when_reading_then_lists_available_columns() {
    let result = read_csv_column(CONVERSATIONS_CSV.as_bytes(), "missing");

    match result {
        Err(TabularError::UnknownColumn { column, available }) => {
            assert_eq!(column, "missing");
            assert_eq!(available, vec!["id", "conversation"]);
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn given_empty_input_when_listing_columns_then_reports_missing_header() {
    let result = read_csv_columns(b"");

    assert!(matches!(result, Err(TabularError::MissingHeader)));
}

#[test]
fn given_results_when_writing_csv_then_quotes_multiline_fields() {
    let results = vec![
        SeparationResult::untitled("A", "B\n\nC"),
        SeparationResult::new("Title, with comma", "p", ""),
    ];

    let csv = write_results_csv(&results).unwrap();

    assert_eq!(
        csv,
        "Title,Prompt,Output\nUntitled Conversation,A,\"B\n\nC\"\n\"Title, with comma\",p,\n"
    );
}

#[test]
fn given_crlf_upload_when_decoding_then_normalizes_line_endings() {
    let text = decode_text_upload(b"Prompt\r\n\r\nOutput\r\n").unwrap();

    assert_eq!(text, "Prompt\n\nOutput\n");
}

#[test]
fn given_invalid_utf8_upload_when_decoding_then_fails() {
    let result = decode_text_upload(&[0x66, 0x6f, 0xff]);

    assert!(matches!(result, Err(TabularError::InvalidUtf8(_))));
}
