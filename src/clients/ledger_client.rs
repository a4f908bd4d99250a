//! # Ledger Client
//!
//! Provides a high‑level API for interacting with the [`LedgerActor`](crate::ledger_actor::LedgerActor).
//! It forwards requests over a Tokio mpsc channel and awaits each answer on a
//! oneshot channel.
use crate::clients::LedgerService;
use crate::ledger_actor::{ClientError, LedgerRequest, Response};
use crate::model::{CancellationReason, DeliveryOrder, OrderId, StatusSummary, UndeliverableOrder};
use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

/// Cloneable handle to a running ledger actor. Holds only a sender, so clones
/// are cheap and can be shared across tasks.
#[derive(Clone)]
pub struct LedgerClient {
    sender: mpsc::Sender<LedgerRequest>,
}

impl LedgerClient {
    pub fn new(sender: mpsc::Sender<LedgerRequest>) -> Self {
        Self { sender }
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(Response<T>) -> LedgerRequest,
    ) -> Result<T, ClientError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| ClientError::ActorClosed)?;
        response.await.map_err(|_| ClientError::ActorDropped)
    }
}

#[async_trait]
impl LedgerService for LedgerClient {
    #[instrument(skip(self))]
    async fn cancel(
        &self,
        id: OrderId,
        reason: CancellationReason,
    ) -> Result<DeliveryOrder, ClientError> {
        debug!("Sending request");
        let result = self
            .request(|respond_to| LedgerRequest::Cancel {
                id,
                reason,
                respond_to,
            })
            .await?;
        Ok(result?)
    }

    #[instrument(skip(self))]
    async fn get(&self, id: OrderId) -> Result<Option<DeliveryOrder>, ClientError> {
        debug!("Sending request");
        self.request(|respond_to| LedgerRequest::Get { id, respond_to })
            .await
    }

    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<DeliveryOrder>, ClientError> {
        debug!("Sending request");
        self.request(|respond_to| LedgerRequest::List { respond_to })
            .await
    }

    #[instrument(skip(self))]
    async fn list_undeliverable(&self) -> Result<Vec<UndeliverableOrder>, ClientError> {
        debug!("Sending request");
        self.request(|respond_to| LedgerRequest::ListUndeliverable { respond_to })
            .await
    }

    #[instrument(skip(self))]
    async fn status_summary(&self) -> Result<StatusSummary, ClientError> {
        debug!("Sending request");
        self.request(|respond_to| LedgerRequest::StatusSummary { respond_to })
            .await
    }
}
