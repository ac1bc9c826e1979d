mod environment;
mod settings;

pub use environment::{ENVIRONMENT_VAR, Environment};
pub use settings::{
    HistorySettings, LlmProvider, LlmSettings, LoggingSettings, SeparationSettings,
    ServerSettings, Settings, SettingsError,
};
