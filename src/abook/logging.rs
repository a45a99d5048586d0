//! Logging initialization.
//!
//! Configures the `tracing` subscriber with level filtering via the
//! `ABOOK_LOG` environment variable. Without it the level is `warn`, or
//! `debug` when `--verbose` is given.
//!
//! ```bash
//! ABOOK_LOG=debug abook
//! ABOOK_LOG=abook::session=debug,warn abook
//! ```
//!
//! Output goes to stderr; stdout carries the interactive protocol.

use tracing_subscriber::{fmt, EnvFilter};

pub const LOG_ENV: &str = "ABOOK_LOG";

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Install the global subscriber. Call once, at startup.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
