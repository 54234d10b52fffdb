// Throttler Library - Public API

// Re-export error types
pub mod error;
pub use error::{Result, ThrottlerError};

// Module declarations
pub mod cli;
pub mod commands;
pub mod core;
pub mod ui;

// Re-export commonly used types
pub use crate::core::config::{Limits, ThrottleConfig};

// Initialize logging. Quiet by default so scheduled runs only print what the
// user asked for; RUST_LOG overrides the level.
pub fn init_logging() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
}
