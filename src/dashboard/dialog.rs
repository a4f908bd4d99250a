//! The cancel-order dialog: pick an order, pick a reason, confirm.

use crate::clients::LedgerService;
use crate::ledger_actor::ClientError;
use crate::model::{CancellationReason, DeliveryOrder, OrderId};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DialogError {
    #[error("No order selected for cancellation")]
    NoOrderSelected,

    #[error("Choose a cancellation reason before confirming")]
    NoReasonSelected,

    /// Delivered and cancelled orders have no cancel action.
    #[error("Order {0} can no longer be cancelled")]
    NotCancellable(OrderId),

    #[error(transparent)]
    Service(#[from] ClientError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CancelDialog {
    order_id: Option<OrderId>,
    reason: Option<CancellationReason>,
}

impl CancelDialog {
    pub fn is_open(&self) -> bool {
        self.order_id.is_some()
    }

    pub fn order_id(&self) -> Option<&OrderId> {
        self.order_id.as_ref()
    }

    pub fn reason(&self) -> Option<CancellationReason> {
        self.reason
    }

    /// Opens the dialog for `order_id`, clearing any previously chosen reason.
    pub fn open(&mut self, order_id: OrderId) {
        self.order_id = Some(order_id);
        self.reason = None;
    }

    pub fn select_reason(&mut self, reason: CancellationReason) {
        self.reason = Some(reason);
    }

    pub fn close(&mut self) {
        *self = Self::default();
    }

    /// Submits the cancellation.
    ///
    /// Nothing is sent unless both an order and a reason are selected. On
    /// success the dialog resets; on a ledger error it stays open with its
    /// selection so the caller can show the message.
    pub async fn confirm<S>(&mut self, service: &S) -> Result<DeliveryOrder, DialogError>
    where
        S: LedgerService + ?Sized,
    {
        let order_id = self.order_id.clone().ok_or(DialogError::NoOrderSelected)?;
        let reason = self.reason.ok_or(DialogError::NoReasonSelected)?;

        debug!(%order_id, %reason, "Confirming cancellation");
        let order = service.cancel(order_id, reason).await?;
        info!(order_id = %order.order_id, %reason, "Order cancelled from dialog");
        self.close();
        Ok(order)
    }
}
