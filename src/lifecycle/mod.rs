//! # System Lifecycle
//!
//! Starts the ledger actor, hands out its client, and shuts it down cleanly.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - Closes the sender side of the channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None`
//! 3. **Actor logs its final counts** and returns the ledger
//! 4. **Await completion** - [`DeliverySystem::shutdown`] joins the task
//!
//! Clones of the client held elsewhere keep the actor alive, so drop them
//! before calling `shutdown`.
//!
//! ## Observability
//!
//! [`setup_tracing`] installs the log subscriber; see the [`tracing`] module.

pub mod delivery_system;
pub mod tracing;

pub use self::delivery_system::*;
pub use self::tracing::setup_tracing;
