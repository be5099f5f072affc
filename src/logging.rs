//! Logging init: stderr with env-controlled filtering.

use tracing_subscriber::EnvFilter;

/// Initialize structured logging to stderr.
///
/// The filter honors `RUST_LOG`; without it, preflight logs at debug and
/// everything else at info. `PREFLIGHT_LOG_FORMAT=json` switches to JSON
/// lines for log aggregation. Call once, before any verification runs.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,preflight=debug"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false);
    if std::env::var("PREFLIGHT_LOG_FORMAT").is_ok_and(|v| v == "json") {
        builder.json().init();
    } else {
        builder.init();
    }
}
