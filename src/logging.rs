//! Diagnostic logging.
//!
//! Events go to stderr through `tracing-subscriber`, filtered by `RUST_LOG`
//! (default `warn`). The branch report on stdout is separate and unaffected.
//! `RUST_LOG=debug` shows every git invocation and every branch disposition,
//! including branches that were skipped because nothing tracks them.

use tracing_subscriber::EnvFilter;

pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Ignore the error from a second initialisation.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
