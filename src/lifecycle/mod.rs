//! # System Lifecycle & Orchestration
//!
//! Starts the board's actors, wires configuration into them and shuts them down.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of the channels
//! 2. **Actors detect closure** - `receiver.recv()` returns `None` once queued requests are handled
//! 3. **Await completion** - wait for every actor task to finish
//!
//! Clones of a client handed out to callers keep their actor alive until they are
//! dropped as well.

pub mod board_system;
pub mod tracing;

pub use board_system::*;
pub use self::tracing::*;
