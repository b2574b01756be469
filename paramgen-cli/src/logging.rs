//! Tracing subscriber setup for the `paramgen` binary.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "PARAMGEN_LOG";

/// Installs a stderr subscriber.
///
/// `PARAMGEN_LOG` wins when set; otherwise the level is `debug` when
/// `is_verbose` and `warn` when not. A subscriber that is already installed
/// is left in place.
pub fn init(is_verbose: bool) {
    let default_level = if is_verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
