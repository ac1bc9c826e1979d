pub mod config;
pub mod handlers;
pub mod router;
pub mod state;

pub use config::{Environment, LlmProvider, Settings, SettingsError};
pub use router::{MAX_BODY_BYTES, create_router};
pub use state::{AppState, HistoryEntry, SessionHistory};
