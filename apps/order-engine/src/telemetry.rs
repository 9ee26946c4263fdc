//! Tracing Setup
//!
//! Installs a `tracing-subscriber` fmt subscriber configured from
//! [`LoggingConfig`]. `RUST_LOG` overrides the configured level.
//!
//! # Usage
//!
//! ```rust,ignore
//! use order_engine::telemetry::init_tracing;
//!
//! init_tracing(&config.observability.logging);
//! ```

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;

use crate::config::LoggingConfig;

/// Initialize the global tracing subscriber.
///
/// Calling this more than once keeps the first subscriber and reports the
/// conflict on stderr.
pub fn init_tracing(config: &LoggingConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.to_ascii_lowercase()));

    let span_events = if config.include_spans {
        FmtSpan::NEW | FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_span_events(span_events);

    let result = match config.format.as_str() {
        "json" => builder.json().try_init(),
        "compact" => builder.compact().try_init(),
        _ => builder.try_init(),
    };

    if let Err(e) = result {
        eprintln!("Tracing subscriber not installed: {e}");
    }
}
