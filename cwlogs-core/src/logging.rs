use std::env;
use std::io;
use tracing_subscriber::{EnvFilter, fmt};

/// Selects the diagnostic log format.
pub const LOG_FORMAT_ENV: &str = "CWLOGS_LOG_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

pub fn parse_log_format(value: Option<&str>) -> LogFormat {
    match value.map(str::trim) {
        Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
        _ => LogFormat::Text,
    }
}

/// Initialize diagnostics.
///
/// Events go to stderr so stdout carries only query output:
/// - `RUST_LOG` filters (defaults to "warn")
/// - `CWLOGS_LOG_FORMAT=json` switches to flattened JSON lines
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let format = parse_log_format(env::var(LOG_FORMAT_ENV).ok().as_deref());

    match format {
        LogFormat::Json => fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .json()
            .flatten_event(true)
            .init(),
        LogFormat::Text => fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .with_target(false)
            .init(),
    }
}
