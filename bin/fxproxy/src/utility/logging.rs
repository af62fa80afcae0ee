use std::io::{stdout, IsTerminal};
use tracing_subscriber::EnvFilter;

/// Used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_LOG_FILTER: &str = "info,fxproxy=debug,tower_http=info";

/// Builds the filter from `RUST_LOG`, falling back to [`DEFAULT_LOG_FILTER`].
pub fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Colored lines on a terminal, JSON lines everywhere else.
pub fn setup_logging() {
    let filter = log_filter();
    let directives = filter.to_string();

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    if stdout().is_terminal() {
        subscriber.with_ansi(true).init();
    } else {
        subscriber.json().with_ansi(false).with_current_span(true).init();
    }

    tracing::info!(filter = %directives, "fxproxy logging ready");
}
