mod app_state;
mod session_history;

pub use app_state::AppState;
pub use session_history::{HistoryEntry, SessionHistory};
