use serde::Deserialize;

/// Untrusted reply of a semantic splitter. Any field may be missing or null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SplitterResponse {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub output: Option<String>,
}

impl SplitterResponse {
    pub fn new(title: Option<&str>, prompt: Option<&str>, output: Option<&str>) -> Self {
        Self {
            title: title.map(String::from),
            prompt: prompt.map(String::from),
            output: output.map(String::from),
        }
    }

    /// Names of the fields the splitter left out, in declaration order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.title.is_none() {
            missing.push("title");
        }
        if self.prompt.is_none() {
            missing.push("prompt");
        }
        if self.output.is_none() {
            missing.push("output");
        }
        missing
    }
}
