//! Logging setup for the loom CLI.
//!
//! Levels, highest priority first:
//! 1. `--verbose`: DEBUG for loom crates
//! 2. `--quiet`: ERROR only
//! 3. `RUST_LOG`
//! 4. INFO for loom crates
//!
//! Logs go to stderr so stdout stays clean for the JSON the engine reads.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str = "loom_config=debug,loom_cli=debug";
const QUIET_FILTER: &str = "error";
const DEFAULT_FILTER: &str = "loom_config=info,loom_cli=info";

/// Install the global subscriber. Call once, before anything logs.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = build_filter(verbose, quiet);
    let ansi = !no_color && crate::ui::should_use_color();

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false) // Don't show the module path (keeps output clean)
        .with_level(true)
        .with_ansi(ansi)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn build_filter(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}
