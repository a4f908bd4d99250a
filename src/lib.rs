//! # Delivery Ledger
//!
//! > **Order state and status metrics behind a delivery dashboard.**
//!
//! The crate tracks deliverable orders (pending, delivered or cancelled) and
//! orders that could not be scheduled at all, runs the cancellation workflow
//! with a reason code, and derives the status breakdown shown in the
//! dashboard's chart.
//!
//! ## Module Tour
//!
//! ### 1. The Core ([`ledger`], [`model`])
//! [`OrderLedger`](ledger::OrderLedger) is a plain, synchronous state holder.
//! - **Role**: Enforces the order state machine. A delivered order can never be
//!   cancelled, and a cancelled order keeps its first reason.
//! - **Key items**: [`cancel`](ledger::OrderLedger::cancel),
//!   [`status_summary`](ledger::OrderLedger::status_summary).
//!
//! ### 2. The Actor ([`ledger_actor`])
//! When several tasks share a ledger, a [`LedgerActor`](ledger_actor::LedgerActor)
//! owns it and processes requests one at a time, so concurrent cancellations of
//! the same order resolve to exactly one success.
//!
//! ### 3. The Interface ([`clients`])
//! [`LedgerClient`](clients::LedgerClient) is a cloneable handle implementing
//! [`LedgerService`](clients::LedgerService).
//!
//! ### 4. Presentation Logic ([`dashboard`])
//! The cancel dialog (no reason, no cancellation) and the status chart data.
//!
//! ### 5. Runtime ([`lifecycle`], [`config`])
//! [`DeliverySystem`](lifecycle::DeliverySystem) wires everything together from a
//! [`LedgerConfig`](config::LedgerConfig).
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run -- --cancel ORD-001 --reason customer-choice
//! ```

pub mod clients;
pub mod config;
pub mod dashboard;
pub mod ledger;
pub mod ledger_actor;
pub mod lifecycle;
pub mod model;
