mod separation_outcome_test;
mod splitter_response_test;
