//! Subscriber installation

use crate::reload::{ReloadHandle, level_filter};
use serdeio_core::LogLevel;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::reload;

/// Initialize logging with a fmt layer filtered at `level`
///
/// The level can be changed later through [`ReloadHandle::global`]. Calling
/// this more than once keeps the first subscriber.
pub fn init_logging(level: LogLevel) {
    let (filter, handle) = reload::Layer::new(level_filter(level));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true));

    if tracing::subscriber::set_global_default(subscriber).is_ok() {
        ReloadHandle::global().set_handle(handle);
    }
}

/// Initialize logging from the `RUST_LOG` environment variable
///
/// Falls back to `info` when the variable is unset or invalid. Directives can
/// target this workspace, e.g. `RUST_LOG=serdeio_transport=trace`.
pub fn init_logging_from_env() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true));

    // Ignore error if a global subscriber is already set
    let _ = tracing::subscriber::set_global_default(subscriber);
}
