//! Diagnostic logging setup
//!
//! Logs go to stderr through `tracing`; user-facing output stays on stdout.
//! `PKGGUARD_LOG` takes an `EnvFilter` directive and overrides `--verbose`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "PKGGUARD_LOG";

fn default_directive(verbose: bool) -> &'static str {
    if verbose { "pkgguard=debug" } else { "warn" }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
