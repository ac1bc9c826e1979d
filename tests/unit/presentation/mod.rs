mod session_history_test;
mod settings_test;
