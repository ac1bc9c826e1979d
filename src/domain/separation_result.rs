use serde::{Deserialize, Serialize};

/// Title used whenever no semantic title can be produced.
pub const UNTITLED_TITLE: &str = "Untitled Conversation";

/// The title/prompt/output triple returned for one input text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeparationResult {
    pub title: String,
    pub prompt: String,
    pub output: String,
}

impl SeparationResult {
    pub fn new(
        title: impl Into<String>,
        prompt: impl Into<String>,
        output: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            prompt: prompt.into(),
            output: output.into(),
        }
    }

    /// The all-empty triple returned for empty input.
    pub fn empty() -> Self {
        Self::new("", "", "")
    }

    pub fn untitled(prompt: impl Into<String>, output: impl Into<String>) -> Self {
        Self::new(UNTITLED_TITLE, prompt, output)
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.prompt.is_empty() && self.output.is_empty()
    }
}
