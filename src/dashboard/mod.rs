//! # Delivery Dashboard
//!
//! Presentation logic for the delivery board, independent of any rendering:
//! which orders are shown, when the cancel action is offered, and what the
//! status chart contains. Works against any [`LedgerService`].

pub mod chart;
pub mod dialog;

pub use chart::*;
pub use dialog::*;

use crate::clients::LedgerService;
use crate::ledger::LedgerError;
use crate::ledger_actor::ClientError;
use crate::model::{CancellationReason, DeliveryOrder, OrderId, UndeliverableOrder};
use tracing::instrument;

/// Everything the board renders, read from the ledger in one refresh.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardView {
    pub orders: Vec<DeliveryOrder>,
    pub undeliverable: Vec<UndeliverableOrder>,
    pub chart: StatusChart,
}

impl BoardView {
    /// Orders that still show a cancel action.
    pub fn cancellable(&self) -> impl Iterator<Item = &DeliveryOrder> {
        self.orders.iter().filter(|order| order.is_pending())
    }
}

pub struct DeliveryDashboard<S> {
    service: S,
    dialog: CancelDialog,
}

impl<S: LedgerService> DeliveryDashboard<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            dialog: CancelDialog::default(),
        }
    }

    pub fn dialog(&self) -> &CancelDialog {
        &self.dialog
    }

    #[instrument(skip(self))]
    pub async fn refresh(&self) -> Result<BoardView, ClientError> {
        let orders = self.service.list().await?;
        let undeliverable = self.service.list_undeliverable().await?;
        let summary = self.service.status_summary().await?;
        Ok(BoardView {
            orders,
            undeliverable,
            chart: StatusChart::from_summary(&summary),
        })
    }

    /// Opens the cancel dialog for a pending order.
    ///
    /// Delivered or already cancelled orders are refused with
    /// [`DialogError::NotCancellable`]; unknown ids with the ledger's `NotFound`.
    #[instrument(skip(self))]
    pub async fn request_cancel(&mut self, order_id: OrderId) -> Result<(), DialogError> {
        let order = self
            .service
            .get(order_id.clone())
            .await?
            .ok_or_else(|| ClientError::Ledger(LedgerError::NotFound(order_id.clone())))?;
        if !order.is_pending() {
            return Err(DialogError::NotCancellable(order_id));
        }
        self.dialog.open(order_id);
        Ok(())
    }

    pub fn select_reason(&mut self, reason: CancellationReason) {
        self.dialog.select_reason(reason);
    }

    /// Closes the dialog without sending anything.
    pub fn dismiss(&mut self) {
        self.dialog.close();
    }

    pub async fn confirm_cancel(&mut self) -> Result<DeliveryOrder, DialogError> {
        self.dialog.confirm(&self.service).await
    }
}
