//! Diagnostic logging via `tracing`.
//!
//! Everything goes to stderr so that stdout only ever carries command output
//! (JSON included). `RUST_LOG` takes precedence over the `--verbose` default.

use std::sync::OnceLock;
use tracing_subscriber::{fmt, EnvFilter};

static LOGGING: OnceLock<()> = OnceLock::new();

/// Install the global subscriber. Safe to call multiple times.
pub fn init(verbose: bool) {
    LOGGING.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "warn,grokir=debug"
    } else {
        "warn"
    }
}
