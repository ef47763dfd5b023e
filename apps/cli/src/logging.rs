//! Logging initialization for the CLI.
//!
//! The library only emits `tracing` events; the subscriber lives here and
//! writes human-readable lines to stdout.

use tracing::Level;

/// `verbosity`: 0 = INFO, 1 = DEBUG, 2+ = TRACE
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();
}
