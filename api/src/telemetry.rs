//! Tracing subscriber setup

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ag_shared::config::{LogFormat, LoggingConfig};

/// Install the global subscriber. `RUST_LOG` overrides `config.level`.
///
/// Fails if a subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), tracing_subscriber::util::TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},actix_web=info,sqlx=warn", config.level)));
    let registry = tracing_subscriber::registry().with(filter);
    let source = config.source_location;

    match config.format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_file(source)
                    .with_line_number(source),
            )
            .try_init(),
        LogFormat::Pretty => registry
            .with(fmt::layer().pretty().with_file(source).with_line_number(source))
            .try_init(),
        LogFormat::Compact => registry
            .with(fmt::layer().compact().with_file(source).with_line_number(source))
            .try_init(),
    }
}
