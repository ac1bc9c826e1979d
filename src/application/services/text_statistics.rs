use crate::domain::TextStats;

/// Number of maximal whitespace-delimited tokens.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

pub fn count_text_stats(text: &str) -> TextStats {
    TextStats {
        word_count: count_words(text),
        char_count: text.chars().count(),
    }
}
