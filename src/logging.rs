//! Diagnostic logging on stderr.
//!
//! The filter comes from `SAM_LOG` (standard `EnvFilter` syntax). Without it
//! only warnings are shown, or debug output for this crate with `--verbose`.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "SAM_LOG";

pub fn init(verbose: bool) {
    let default = if verbose { "sam_agents=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    // A subscriber may already be installed (tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
