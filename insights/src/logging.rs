//! Logging setup for the CLI using `tracing-subscriber`.
//!
//! Logs always go to stderr so `--output json` on stdout stays parseable.
//!
//! - 0 (no `-v`): warn
//! - 1 (`-v`): info
//! - 2 (`-vv`): debug
//! - 3+ (`-vvv`): trace
//!
//! `RUST_LOG`, when set, replaces the verbosity-derived filter.

use std::io;

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Level for a `-v` count.
pub fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = level.as_str().to_lowercase();
        EnvFilter::new(format!("warn,insights={level},insightslib={level}"))
    })
}

/// Install the global subscriber. Later calls are ignored.
pub fn init(verbosity: u8) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_env_filter(level_for(verbosity)))
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
