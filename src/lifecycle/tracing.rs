//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter for the process.
//!
//! The post actor logs each operation with an `entity_type` field, and client calls
//! open spans (`create_post`, `update_post`, ...) so a request can be followed from the
//! caller into the store. The validator itself does not log.
//!
//! ```bash
//! RUST_LOG=info cargo run      # Compact logs
//! RUST_LOG=debug cargo run     # Full payloads
//! ```
//!
//! Without `RUST_LOG`, the level from [`LogConfig`] applies.

use crate::config::LogConfig;
use tracing_subscriber::EnvFilter;

/// Initializes the global subscriber. Call once, at startup.
///
/// `RUST_LOG` wins over `log.level`; an unparsable `log.level` falls back to `info`.
pub fn setup_tracing(log: &LogConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&log.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // entity_type identifies the source instead
        .compact()
        .init();
}
