//! serdeio-logging - Tracing subscriber setup
//!
//! This crate provides:
//! - [`init_logging`] to install a fmt subscriber with a reloadable level
//! - [`init_logging_from_env`] to install a subscriber filtered by `RUST_LOG`
//! - [`ReloadHandle`] to change the level at runtime

mod layer;
mod reload;

pub use layer::{init_logging, init_logging_from_env};
pub use reload::{LoggingError, ReloadHandle, level_filter};
pub use serdeio_core::LogLevel;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{LogLevel, ReloadHandle, init_logging, init_logging_from_env};
}
