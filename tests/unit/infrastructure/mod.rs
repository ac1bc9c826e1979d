mod prompt_sanitizer_test;
mod request_id_test;
mod splitter_factory_test;
mod tabular_test;
mod tracing_config_test;
