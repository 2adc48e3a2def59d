//! Tracing setup. Logs go to stderr so stdout carries only artifacts.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "alembic=info";

/// Install the global subscriber
///
/// An explicit filter wins over `RUST_LOG`, which wins over the default.
pub fn init(filter: Option<&str>) {
    let filter = match filter {
        Some(directives) => EnvFilter::new(directives),
        None => {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
