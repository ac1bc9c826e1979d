use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, fmt};

use super::{DEFAULT_LOG_FILTER, TracingConfig};

/// Installs the global subscriber. `RUST_LOG` takes precedence over the
/// configured filter; an unparsable filter falls back to the default.
pub fn init_tracing(config: &TracingConfig) -> Result<(), TryInitError> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let json_layer = config.json_format.then(|| {
        fmt::layer()
            .json()
            .with_current_span(true)
            .with_file(true)
            .with_line_number(true)
    });
    let text_layer = (!config.json_format).then(|| fmt::layer().with_line_number(true));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .try_init()?;

    tracing::info!(
        environment = %config.environment,
        json_format = config.json_format,
        filter = %config.filter,
        "Tracing initialized"
    );
    Ok(())
}
