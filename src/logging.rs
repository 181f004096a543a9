//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// `log_level` accepts any `EnvFilter` directive (e.g. `info`,
/// `sentiment_service=debug,tower_http=info`); an invalid directive falls back
/// to `info`. `log_format` is `json` for structured output, anything else
/// selects the human-readable formatter.
pub fn init(log_level: &str, log_format: &str) {
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
