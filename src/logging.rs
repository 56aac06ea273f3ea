//! Tracing initialisation for the benchmark binary.
//!
//! Diagnostics go to `stderr` so stdout stays clean for tooling; the level
//! is controlled through `RUST_LOG` and defaults to `info`.

use std::sync::OnceLock;

use tracing_subscriber::EnvFilter;

static INITIALISED: OnceLock<()> = OnceLock::new();

/// Install the global tracing subscriber if it has not been configured yet.
/// Subsequent calls are no-ops, so tests and library embedders can call it
/// freely.
pub fn init_logging() {
    if INITIALISED.get().is_some() {
        return;
    }
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
    let _ = INITIALISED.set(());
}
