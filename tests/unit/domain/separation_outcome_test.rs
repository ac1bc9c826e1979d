use prompt_separator::domain::{
    SeparationOutcome, SeparationResult, SeparationSource, SeparationWarning,
};

#[test]
fn given_outcome_with_warning_when_checking_then_reports_degraded() {
    let outcome = SeparationOutcome {
        result: SeparationResult::untitled("p", "o"),
        warnings: vec![SeparationWarning::SplitterTransportFailure {
            reason: "HTTP 502".to_string(),
        }],
        source: SeparationSource::Fallback,
    };

    assert!(outcome.is_degraded());
}

#[test]
fn given_silent_fallback_when_checking_then_is_not_degraded() {
    let outcome = SeparationOutcome {
        result: SeparationResult::untitled("p", "o"),
        warnings: Vec::new(),
        source: SeparationSource::Fallback,
    };

    assert!(!outcome.is_degraded());
}
