//! Structured logging setup on top of `tracing`

use crate::io::configuration::{
    DEFAULT_LOG_DIRECTIVE, QUIET_LOG_DIRECTIVE, VERBOSE_LOG_DIRECTIVE,
};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Pick the filter directive for the requested verbosity
///
/// Quiet wins over verbose when both are set.
pub const fn filter_directive(quiet: bool, verbose: bool) -> &'static str {
    if quiet {
        QUIET_LOG_DIRECTIVE
    } else if verbose {
        VERBOSE_LOG_DIRECTIVE
    } else {
        DEFAULT_LOG_DIRECTIVE
    }
}

/// Install the global subscriber writing human-readable lines to stderr
///
/// `RUST_LOG` overrides the directive derived from the flags. Calling this
/// more than once keeps the first subscriber.
pub fn init_logging(quiet: bool, verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(quiet, verbose)));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .try_init();
}
