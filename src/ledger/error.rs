//! Error types for the order ledger.

use crate::model::OrderId;
use thiserror::Error;

/// Errors reported by [`OrderLedger`](crate::ledger::OrderLedger) operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// No deliverable order has this id.
    #[error("Order not found: {0}")]
    NotFound(OrderId),

    /// The order was already delivered and can no longer be cancelled.
    #[error("Invalid transition: order {0} is already delivered")]
    InvalidTransition(OrderId),

    /// The order was cancelled earlier; its reason is left as it was.
    #[error("Order already cancelled: {0}")]
    AlreadyCancelled(OrderId),

    /// Two seed records share an id.
    #[error("Duplicate order id in seed: {0}")]
    DuplicateOrder(OrderId),

    /// A seed record describes a state no order can reach.
    #[error("Invalid seed record {id}: {reason}")]
    InvalidSeed { id: OrderId, reason: String },
}
