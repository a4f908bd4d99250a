//! # Mock Ledger & Testing Guide
//!
//! [`MockLedger`] hands out a real [`LedgerClient`] whose requests are answered
//! from a queue of expectations instead of a ledger. Use it to test code that
//! sits *around* the client (the dashboard, a request handler) without
//! spawning a [`LedgerActor`](crate::ledger_actor::LedgerActor).
//!
//! | | MockLedger | Real actor |
//! |---|---|---|
//! | **State** | None, answers are scripted | Real [`OrderLedger`](crate::ledger::OrderLedger) |
//! | **Error injection** | Easy (`return_err`) | Needs a ledger in the right state |
//! | **Use case** | Logic around the client | The actor itself or the full system |
//!
//! ```rust
//! use delivery_ledger::clients::LedgerService;
//! use delivery_ledger::ledger::LedgerError;
//! use delivery_ledger::ledger_actor::{mock::MockLedger, ClientError};
//! use delivery_ledger::model::CancellationReason;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockLedger::new();
//!     mock.expect_cancel("ORD-002".into(), CancellationReason::OtherIncident)
//!         .return_err(LedgerError::InvalidTransition("ORD-002".into()));
//!
//!     let client = mock.client();
//!     let result = client.cancel("ORD-002".into(), CancellationReason::OtherIncident).await;
//!     assert!(matches!(result, Err(ClientError::Ledger(LedgerError::InvalidTransition(_)))));
//!     mock.verify();
//! }
//! ```
//!
//! For finer control, [`create_mock_client`] returns the client together with the
//! request receiver, and the `expect_*` helpers pull the next request off it.

use crate::clients::LedgerClient;
use crate::ledger::LedgerError;
use crate::ledger_actor::{LedgerRequest, Response};
use crate::model::{CancellationReason, DeliveryOrder, OrderId, StatusSummary, UndeliverableOrder};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// A scripted answer for the next request.
enum Expectation {
    Cancel {
        id: OrderId,
        reason: CancellationReason,
        response: Result<DeliveryOrder, LedgerError>,
    },
    Get {
        id: OrderId,
        response: Option<DeliveryOrder>,
    },
    List(Vec<DeliveryOrder>),
    ListUndeliverable(Vec<UndeliverableOrder>),
    StatusSummary(StatusSummary),
}

type Expectations = Arc<Mutex<VecDeque<Expectation>>>;

/// A mock ledger with expectation tracking for fluent testing.
///
/// Requests must arrive in the order the expectations were registered; an
/// unexpected request or a mismatched id or reason panics the background task, which
/// the client then sees as [`ClientError::ActorDropped`](crate::ledger_actor::ClientError::ActorDropped).
pub struct MockLedger {
    client: LedgerClient,
    expectations: Expectations,
    _handle: tokio::task::JoinHandle<()>,
}

impl Default for MockLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl MockLedger {
    /// Creates a new mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<LedgerRequest>(100);
        let expectations: Expectations = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone
                    .lock()
                    .expect("expectation lock poisoned")
                    .pop_front();

                match (request, expectation) {
                    (
                        LedgerRequest::Cancel {
                            id,
                            reason,
                            respond_to,
                        },
                        Some(Expectation::Cancel {
                            id: expected,
                            reason: expected_reason,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "Cancel for unexpected order");
                        assert_eq!(reason, expected_reason, "Cancel with unexpected reason");
                        let _ = respond_to.send(response);
                    }
                    (
                        LedgerRequest::Get { id, respond_to },
                        Some(Expectation::Get {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "Get for unexpected order");
                        let _ = respond_to.send(response);
                    }
                    (LedgerRequest::List { respond_to }, Some(Expectation::List(orders))) => {
                        let _ = respond_to.send(orders);
                    }
                    (
                        LedgerRequest::ListUndeliverable { respond_to },
                        Some(Expectation::ListUndeliverable(orders)),
                    ) => {
                        let _ = respond_to.send(orders);
                    }
                    (
                        LedgerRequest::StatusSummary { respond_to },
                        Some(Expectation::StatusSummary(summary)),
                    ) => {
                        let _ = respond_to.send(summary);
                    }
                    (request, _) => {
                        panic!("Unexpected request or expectation mismatch: {request:?}");
                    }
                }
            }
        });

        Self {
            client: LedgerClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> LedgerClient {
        self.client.clone()
    }

    pub fn expect_cancel(
        &mut self,
        id: OrderId,
        reason: CancellationReason,
    ) -> CancelExpectationBuilder {
        CancelExpectationBuilder {
            id,
            reason,
            expectations: self.expectations.clone(),
        }
    }

    pub fn expect_get(&mut self, id: OrderId) -> GetExpectationBuilder {
        GetExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    pub fn expect_list(&mut self, orders: Vec<DeliveryOrder>) {
        self.push(Expectation::List(orders));
    }

    pub fn expect_list_undeliverable(&mut self, orders: Vec<UndeliverableOrder>) {
        self.push(Expectation::ListUndeliverable(orders));
    }

    pub fn expect_status_summary(&mut self, summary: StatusSummary) {
        self.push(Expectation::StatusSummary(summary));
    }

    /// Panics if any expectation was not consumed.
    pub fn verify(&self) {
        let exps = self.expectations.lock().expect("expectation lock poisoned");
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }

    fn push(&self, expectation: Expectation) {
        push(&self.expectations, expectation);
    }
}

fn push(expectations: &Expectations, expectation: Expectation) {
    expectations
        .lock()
        .expect("expectation lock poisoned")
        .push_back(expectation);
}

/// Builder for `cancel` expectations.
pub struct CancelExpectationBuilder {
    id: OrderId,
    reason: CancellationReason,
    expectations: Expectations,
}

impl CancelExpectationBuilder {
    pub fn return_ok(self, order: DeliveryOrder) {
        push(
            &self.expectations,
            Expectation::Cancel {
                id: self.id,
                reason: self.reason,
                response: Ok(order),
            },
        );
    }

    pub fn return_err(self, error: LedgerError) {
        push(
            &self.expectations,
            Expectation::Cancel {
                id: self.id,
                reason: self.reason,
                response: Err(error),
            },
        );
    }
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder {
    id: OrderId,
    expectations: Expectations,
}

impl GetExpectationBuilder {
    pub fn return_ok(self, order: Option<DeliveryOrder>) {
        push(
            &self.expectations,
            Expectation::Get {
                id: self.id,
                response: order,
            },
        );
    }
}

// =============================================================================
// RECEIVER HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// The test plays the actor: it pulls requests off `receiver`, asserts on them,
/// and answers (or drops) the responder.
pub fn create_mock_client(buffer_size: usize) -> (LedgerClient, mpsc::Receiver<LedgerRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (LedgerClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Cancel request.
pub async fn expect_cancel(
    receiver: &mut mpsc::Receiver<LedgerRequest>,
) -> Option<(
    OrderId,
    CancellationReason,
    Response<Result<DeliveryOrder, LedgerError>>,
)> {
    match receiver.recv().await {
        Some(LedgerRequest::Cancel {
            id,
            reason,
            respond_to,
        }) => Some((id, reason, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a StatusSummary request.
pub async fn expect_status_summary(
    receiver: &mut mpsc::Receiver<LedgerRequest>,
) -> Option<Response<StatusSummary>> {
    match receiver.recv().await {
        Some(LedgerRequest::StatusSummary { respond_to }) => Some(respond_to),
        _ => None,
    }
}
