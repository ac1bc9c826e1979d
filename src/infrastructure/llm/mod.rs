mod llm_semantic_splitter;
mod mock_llm_client;
mod openai_client;
mod splitter_factory;
mod splitter_prompt;

pub use llm_semantic_splitter::{LlmSemanticSplitter, parse_splitter_reply};
pub use mock_llm_client::MockLlmClient;
pub use openai_client::{OpenAiCompatibleClient, create_llm_client};
pub use splitter_factory::SplitterFactory;
pub use splitter_prompt::{SPLITTER_SYSTEM_PROMPT, build_split_request};
