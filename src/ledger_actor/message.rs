//! # Ledger Messages
//!
//! Requests sent from a [`LedgerClient`](crate::clients::LedgerClient) to the
//! [`LedgerActor`](crate::ledger_actor::LedgerActor). Each request carries the
//! one-shot channel its answer is sent back on.

use crate::ledger::LedgerError;
use crate::model::{CancellationReason, DeliveryOrder, OrderId, StatusSummary, UndeliverableOrder};
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<T>;

/// One variant per ledger operation. `Cancel` is the only mutation; every
/// other request is answered with an owned snapshot.
#[derive(Debug)]
pub enum LedgerRequest {
    Cancel {
        id: OrderId,
        reason: CancellationReason,
        respond_to: Response<Result<DeliveryOrder, LedgerError>>,
    },
    Get {
        id: OrderId,
        respond_to: Response<Option<DeliveryOrder>>,
    },
    List {
        respond_to: Response<Vec<DeliveryOrder>>,
    },
    ListUndeliverable {
        respond_to: Response<Vec<UndeliverableOrder>>,
    },
    StatusSummary {
        respond_to: Response<StatusSummary>,
    },
}
