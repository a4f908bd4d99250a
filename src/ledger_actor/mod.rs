//! # Ledger Actor
//!
//! Serializes access to one [`OrderLedger`](crate::ledger::OrderLedger) so it can
//! be shared between tasks.
//!
//! ## Structure
//!
//! - [`actor`] - [`LedgerActor`], the task that owns the ledger
//! - [`message`] - [`LedgerRequest`], one variant per ledger operation
//! - [`error`] - [`ClientError`] returned to callers
//! - [`mock`] - Test doubles for code that talks to the actor
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use delivery_ledger::clients::LedgerService;
//! use delivery_ledger::ledger::{sample_board, OrderLedger};
//! use delivery_ledger::ledger_actor;
//! use delivery_ledger::model::CancellationReason;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let ledger = OrderLedger::from_seed(sample_board())?;
//!     let (actor, client) = ledger_actor::new(ledger, 32);
//!     tokio::spawn(actor.run());
//!
//!     client.cancel("ORD-001".into(), CancellationReason::CustomerChoice).await?;
//!     assert_eq!(client.status_summary().await?.cancelled, 1);
//!     Ok(())
//! }
//! ```

pub mod actor;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::*;
pub use error::*;
pub use message::*;

use crate::clients::LedgerClient;
use crate::ledger::OrderLedger;

/// Creates a new ledger actor and its client.
pub fn new(ledger: OrderLedger, buffer_size: usize) -> (LedgerActor, LedgerClient) {
    LedgerActor::new(ledger, buffer_size)
}
