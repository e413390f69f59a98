//! Structured logging configuration for the `envset` binary.
//!
//! Library code only emits `tracing` events; installing a subscriber is left
//! to the program.

use tracing_subscriber::{
    filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, Registry,
};

/// Valid log levels, lowest first.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Initialize tracing.
///
/// `RUST_LOG` takes precedence over `level`. Output goes to standard error so
/// it never mixes with resolved values printed on standard output.
///
/// # Panics
///
/// Panics if a tracing subscriber has already been initialized in this process.
pub fn init_tracing(level: &str, json: bool) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if json {
        let json_layer = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_file(true)
            .with_line_number(true);

        Registry::default().with(env_filter).with(json_layer).init();
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true);

        Registry::default().with(env_filter).with(fmt_layer).init();
    }

    tracing::debug!("Tracing initialized: level={}, json={}", level, json);
}

/// Whether `level` is one of [`LOG_LEVELS`], ignoring case.
#[must_use]
pub fn is_valid_level(level: &str) -> bool {
    LOG_LEVELS.contains(&level.to_lowercase().as_str())
}
