//! # Client Errors
//!
//! Failures seen by callers of the ledger actor: either the actor could not be
//! reached, or the ledger itself refused the operation.

use crate::ledger::LedgerError;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ClientError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

impl ClientError {
    /// The ledger error behind this failure, if the actor was reached.
    pub fn ledger_error(&self) -> Option<&LedgerError> {
        match self {
            ClientError::Ledger(e) => Some(e),
            _ => None,
        }
    }
}
