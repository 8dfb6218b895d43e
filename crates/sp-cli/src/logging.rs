//! Terminal logging.
//!
//! Events go to stderr so that the route report on stdout stays clean.  The
//! filter comes from `RUST_LOG` when set, otherwise from `--log-level`.

use tracing_subscriber::EnvFilter;

pub fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
