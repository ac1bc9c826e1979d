mod llm_client;
mod semantic_splitter;
mod warning_sink;

pub use llm_client::{LlmClient, LlmClientError};
pub use semantic_splitter::{SemanticSplitter, SemanticSplitterError};
pub use warning_sink::{NoopWarningSink, WarningSink};
