use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TextStats {
    pub word_count: usize,
    pub char_count: usize,
}
