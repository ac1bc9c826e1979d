use prompt_separator::presentation::SessionHistory;

#[test]
fn given_recorded_inputs_when_listing_then_returns_newest_first() {
    let mut history = SessionHistory::new(10);
    history.record("first", "Untitled Conversation");
    history.record("second", "Greeting");

    let entries = history.entries();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].input, "second");
    assert_eq!(entries[0].number, 2);
    assert_eq!(entries[1].title, "Untitled Conversation");
    assert_eq!(entries[1].number, 1);
}

#[test]
fn given_full_history_when_recording_then_evicts_oldest() {
    let mut history = SessionHistory::new(2);
    history.record("a", "t");
    history.record("b", "t");
    history.record("c", "t");

    let inputs: Vec<String> = history.entries().into_iter().map(|e| e.input).collect();

    assert_eq!(inputs, vec!["c", "b"]);
    assert_eq!(history.len(), 2);
}

#[test]
fn given_entries_when_clearing_then_returns_count_and_restarts_numbering() {
    let mut history = SessionHistory::new(5);
    history.record("a", "t");
    history.record("b", "t");

    let cleared = history.clear();
    let entry = history.record("c", "t");

    assert_eq!(cleared, 2);
    assert_eq!(entry.number, 1);
    assert_eq!(history.len(), 1);
}

#[test]
fn given_zero_capacity_when_creating_then_keeps_one_entry() {
    let mut history = SessionHistory::new(0);
    history.record("a", "t");
    history.record("b", "t");

    assert_eq!(history.len(), 1);
    assert!(!history.is_empty());
}
