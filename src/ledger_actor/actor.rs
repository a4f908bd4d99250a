//! # Ledger Actor
//!
//! The "server" half of the ledger: it owns the [`OrderLedger`] and the receiver
//! end of the request channel, and processes requests one at a time. Because a
//! single task owns the ledger, two clients cancelling the same order at once
//! always resolve to one success and one `AlreadyCancelled`.

use crate::clients::LedgerClient;
use crate::ledger::OrderLedger;
use crate::ledger_actor::LedgerRequest;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

pub struct LedgerActor {
    receiver: mpsc::Receiver<LedgerRequest>,
    ledger: OrderLedger,
}

impl LedgerActor {
    /// Creates a new `LedgerActor` and its associated `LedgerClient`.
    ///
    /// # Arguments
    ///
    /// * `ledger` - The seeded ledger the actor takes ownership of.
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    pub fn new(ledger: OrderLedger, buffer_size: usize) -> (Self, LedgerClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, ledger };
        (actor, LedgerClient::new(sender))
    }

    /// Runs the actor's event loop until every client has been dropped.
    ///
    /// Returns the final ledger so the caller can inspect it after shutdown.
    pub async fn run(mut self) -> OrderLedger {
        info!(
            orders = self.ledger.list().len(),
            undeliverable = self.ledger.list_undeliverable().len(),
            "Actor started"
        );

        while let Some(msg) = self.receiver.recv().await {
            self.handle(msg);
        }

        let summary = self.ledger.status_summary();
        info!(
            delivered = summary.delivered,
            pending = summary.pending,
            cancelled = summary.cancelled,
            undeliverable = summary.undeliverable,
            "Shutdown"
        );
        self.ledger
    }

    fn handle(&mut self, msg: LedgerRequest) {
        match msg {
            LedgerRequest::Cancel {
                id,
                reason,
                respond_to,
            } => {
                debug!(%id, ?reason, "Cancel");
                let result = self.ledger.cancel(&id, reason).cloned();
                match &result {
                    Ok(_) => info!(%id, %reason, "Cancelled"),
                    Err(e) => warn!(%id, error = %e, "Cancel failed"),
                }
                let _ = respond_to.send(result);
            }
            LedgerRequest::Get { id, respond_to } => {
                let order = self.ledger.get(&id).cloned();
                debug!(%id, found = order.is_some(), "Get");
                let _ = respond_to.send(order);
            }
            LedgerRequest::List { respond_to } => {
                debug!(size = self.ledger.list().len(), "List");
                let _ = respond_to.send(self.ledger.list().to_vec());
            }
            LedgerRequest::ListUndeliverable { respond_to } => {
                debug!(size = self.ledger.list_undeliverable().len(), "ListUndeliverable");
                let _ = respond_to.send(self.ledger.list_undeliverable().to_vec());
            }
            LedgerRequest::StatusSummary { respond_to } => {
                let summary = self.ledger.status_summary();
                debug!(?summary, "StatusSummary");
                let _ = respond_to.send(summary);
            }
        }
    }
}
