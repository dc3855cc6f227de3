//! Diagnostics of the runner.
//!
//! The runner emits `tracing` events (which case is running, which case
//! aborted, totals). They are disabled unless a subscriber is installed,
//! e.g. by [init]. Failure reports never go through here: they are the
//! output of the program, see [`Report`](crate::Report).

use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directives, e.g. `CANDELA_LOG=debug`.
pub const ENV: &str = "CANDELA_LOG";

/// Filter used when [ENV] is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn";

/// Install a subscriber writing to stderr.
///
/// Does nothing if a global subscriber is already installed.
pub fn init() {
    let filter = EnvFilter::try_from_env(ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
    if installed.is_err() {
        tracing::debug!("a global subscriber is already installed");
    }
}

#[cfg(test)]
mod test {
    #[test]
    fn init_is_idempotent() {
        super::init();
        super::init();
        tracing::warn!("logging is set up");
    }
}
