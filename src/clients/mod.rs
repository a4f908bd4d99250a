//! Typed handles for talking to the ledger actor.

pub mod ledger_client;
pub mod service;

pub use ledger_client::*;
pub use service::*;
