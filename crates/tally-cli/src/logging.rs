//! Diagnostic logging to stderr.
//!
//! Filter precedence: `TALLY_LOG`, then `[log] level` from the config file,
//! then `warn`. Stdout is reserved for the interactive session.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "TALLY_LOG";
const DEFAULT_LEVEL: &str = "warn";

pub fn init(config_level: Option<&str>) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(config_level.unwrap_or(DEFAULT_LEVEL)))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    // A second init (tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
