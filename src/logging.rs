//! Diagnostic logging to stderr.
//!
//! Verbosity comes from `ATTENDASH_LOG` (same syntax as `RUST_LOG`), default `warn`.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "ATTENDASH_LOG";

pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    // A second init (e.g. from tests) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
}
