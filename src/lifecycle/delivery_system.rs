use crate::clients::LedgerClient;
use crate::config::{ConfigError, LedgerConfig};
use crate::ledger::OrderLedger;
use tracing::{error, info};

/// Runtime orchestrator for the delivery board.
///
/// Owns the task running the [`LedgerActor`](crate::ledger_actor::LedgerActor)
/// and exposes the client used to talk to it.
///
/// # Example
///
/// ```ignore
/// let system = DeliverySystem::from_config(&LedgerConfig::default())?;
/// let summary = system.ledger_client.status_summary().await?;
/// let final_ledger = system.shutdown().await?;
/// ```
pub struct DeliverySystem {
    /// Client for interacting with the ledger actor
    pub ledger_client: LedgerClient,

    handle: tokio::task::JoinHandle<OrderLedger>,
}

impl DeliverySystem {
    /// Spawns the ledger actor over an already seeded ledger.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new(ledger: OrderLedger, channel_capacity: usize) -> Self {
        let (actor, ledger_client) = crate::ledger_actor::new(ledger, channel_capacity);
        let handle = tokio::spawn(actor.run());
        Self {
            ledger_client,
            handle,
        }
    }

    /// Builds the ledger described by `config` and starts the system.
    pub fn from_config(config: &LedgerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let ledger = config.build_ledger()?;
        info!(
            orders = ledger.list().len(),
            undeliverable = ledger.list_undeliverable().len(),
            "Ledger seeded"
        );
        Ok(Self::new(ledger, config.channel_capacity))
    }

    /// Gracefully shuts down the system and returns the final ledger.
    ///
    /// # Returns
    ///
    /// - `Ok(ledger)` once the actor has drained its channel and exited
    /// - `Err(String)` if the actor task failed or panicked
    pub async fn shutdown(self) -> Result<OrderLedger, String> {
        info!("Shutting down system...");

        // Dropping the last sender makes the actor's recv() return None.
        drop(self.ledger_client);

        match self.handle.await {
            Ok(ledger) => {
                info!("System shutdown complete.");
                Ok(ledger)
            }
            Err(e) => {
                error!("Actor task failed: {:?}", e);
                Err(format!("Actor task failed: {:?}", e))
            }
        }
    }
}
