use prompt_separator::application::services::{count_text_stats, count_words};
use prompt_separator::domain::TextStats;

#[test]
fn given_irregular_spacing_when_counting_stats_then_counts_words_and_every_char() {
    assert_eq!(
        count_text_stats("a b  c"),
        TextStats {
            word_count: 3,
            char_count: 6,
        }
    );
}

#[test]
fn given_empty_string_when_counting_stats_then_returns_zero() {
    assert_eq!(count_text_stats(""), TextStats::default());
}

#[test]
fn given_newlines_and_tabs_when_counting_words_then_treats_them_as_separators() {
    assert_eq!(count_words("one\ttwo\n\nthree \r\n four"), 4);
}

#[test]
fn given_multibyte_text_when_counting_stats_then_counts_characters_not_bytes() {
    let stats = count_text_stats("héllo wörld ✂");
    assert_eq!(stats.word_count, 3);
    assert_eq!(stats.char_count, 13);
}
