//! # LedgerService Trait
//!
//! The operations the presentation layer needs from a ledger. The dashboard is
//! written against this trait, so it runs the same over the real actor client
//! or a test double.

use crate::ledger_actor::ClientError;
use crate::model::{CancellationReason, DeliveryOrder, OrderId, StatusSummary, UndeliverableOrder};
use async_trait::async_trait;

#[async_trait]
pub trait LedgerService: Send + Sync {
    /// Cancel a pending order. Returns the updated order.
    async fn cancel(
        &self,
        id: OrderId,
        reason: CancellationReason,
    ) -> Result<DeliveryOrder, ClientError>;

    /// Fetch one deliverable order by id.
    async fn get(&self, id: OrderId) -> Result<Option<DeliveryOrder>, ClientError>;

    /// Snapshot of the deliverable orders in insertion order.
    async fn list(&self) -> Result<Vec<DeliveryOrder>, ClientError>;

    /// Snapshot of the undeliverable orders in insertion order.
    async fn list_undeliverable(&self) -> Result<Vec<UndeliverableOrder>, ClientError>;

    /// Current status distribution.
    async fn status_summary(&self) -> Result<StatusSummary, ClientError>;
}
