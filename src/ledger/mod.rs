//! # Order Ledger
//!
//! In-memory table of deliverable orders plus the read-only list of undeliverable
//! orders. The ledger is a plain state holder: it performs no I/O and no logging,
//! and reports every failure to its caller as a [`LedgerError`].
//!
//! The only mutation is [`OrderLedger::cancel`]. Orders are seeded once at
//! construction; see [`seed`] for the built-in board and seed files.
//!
//! Shared access from several tasks goes through the single-writer
//! [`LedgerActor`](crate::ledger_actor::LedgerActor).

pub mod error;
pub mod seed;

pub use error::*;
pub use seed::*;

use crate::model::{
    CancellationReason, DeliveryOrder, OrderId, OrderState, StatusSummary, UndeliverableOrder,
};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderLedger {
    orders: Vec<DeliveryOrder>,
    index: HashMap<OrderId, usize>,
    undeliverable: Vec<UndeliverableOrder>,
}

impl OrderLedger {
    /// Builds a ledger from its seed collections, keeping insertion order.
    ///
    /// Fails with [`LedgerError::DuplicateOrder`] if an id appears twice in
    /// either collection or in both.
    pub fn new(
        orders: Vec<DeliveryOrder>,
        undeliverable: Vec<UndeliverableOrder>,
    ) -> Result<Self, LedgerError> {
        let mut index = HashMap::with_capacity(orders.len());
        for (position, order) in orders.iter().enumerate() {
            if index.insert(order.order_id.clone(), position).is_some() {
                return Err(LedgerError::DuplicateOrder(order.order_id.clone()));
            }
        }

        let mut seen = HashSet::with_capacity(undeliverable.len());
        for entry in &undeliverable {
            if index.contains_key(&entry.order_id) || !seen.insert(&entry.order_id) {
                return Err(LedgerError::DuplicateOrder(entry.order_id.clone()));
            }
        }

        Ok(Self {
            orders,
            index,
            undeliverable,
        })
    }

    pub fn from_seed(seed: Seed) -> Result<Self, LedgerError> {
        Self::new(seed.orders, seed.undeliverable)
    }

    /// Cancels a pending order with the given reason.
    ///
    /// # Errors
    /// - [`LedgerError::NotFound`] if no deliverable order has this id
    /// - [`LedgerError::InvalidTransition`] if the order is delivered
    /// - [`LedgerError::AlreadyCancelled`] if the order is cancelled; the
    ///   original reason is kept
    ///
    /// State is unchanged whenever an error is returned.
    pub fn cancel(
        &mut self,
        id: &OrderId,
        reason: CancellationReason,
    ) -> Result<&DeliveryOrder, LedgerError> {
        let position = *self
            .index
            .get(id)
            .ok_or_else(|| LedgerError::NotFound(id.clone()))?;
        let order = &mut self.orders[position];

        match order.state() {
            OrderState::Delivered => Err(LedgerError::InvalidTransition(id.clone())),
            OrderState::Cancelled(_) => Err(LedgerError::AlreadyCancelled(id.clone())),
            OrderState::Pending => {
                order.set_state(OrderState::Cancelled(reason));
                Ok(&*order)
            }
        }
    }

    pub fn get(&self, id: &OrderId) -> Option<&DeliveryOrder> {
        self.index.get(id).map(|&position| &self.orders[position])
    }

    /// Deliverable orders in insertion order.
    pub fn list(&self) -> &[DeliveryOrder] {
        &self.orders
    }

    /// Undeliverable orders in insertion order.
    pub fn list_undeliverable(&self) -> &[UndeliverableOrder] {
        &self.undeliverable
    }

    /// Counts every tracked order into exactly one status category.
    ///
    /// Computed from the current state on every call.
    pub fn status_summary(&self) -> StatusSummary {
        let mut summary = StatusSummary {
            undeliverable: self.undeliverable.len(),
            ..StatusSummary::default()
        };
        for order in &self.orders {
            match order.state() {
                OrderState::Delivered => summary.delivered += 1,
                OrderState::Pending => summary.pending += 1,
                OrderState::Cancelled(_) => summary.cancelled += 1,
            }
        }
        summary
    }

    /// Number of tracked orders, deliverable and undeliverable.
    pub fn len(&self) -> usize {
        self.orders.len() + self.undeliverable.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StatusCategory;
    use proptest::prelude::*;

    fn pending(id: &str) -> DeliveryOrder {
        DeliveryOrder::new(id, "John Smith", "555-0123", "123 Main St", vec!["Laptop".into()])
    }

    fn two_order_ledger() -> OrderLedger {
        OrderLedger::new(vec![pending("ORD-001"), pending("ORD-002").delivered()], vec![]).unwrap()
    }

    #[test]
    fn test_pending_and_delivered_scenario() {
        let mut ledger = two_order_ledger();
        assert_eq!(
            ledger.status_summary(),
            StatusSummary {
                delivered: 1,
                pending: 1,
                cancelled: 0,
                undeliverable: 0,
            }
        );

        let order = ledger
            .cancel(&"ORD-001".into(), CancellationReason::CustomerChoice)
            .unwrap();
        assert!(order.is_cancelled());
        assert_eq!(order.cancellation_reason(), Some(CancellationReason::CustomerChoice));
        assert_eq!(
            ledger.status_summary(),
            StatusSummary {
                delivered: 1,
                pending: 0,
                cancelled: 1,
                undeliverable: 0,
            }
        );

        let before = ledger.clone();
        let result = ledger.cancel(&"ORD-002".into(), CancellationReason::OtherIncident);
        assert_eq!(result, Err(LedgerError::InvalidTransition("ORD-002".into())));
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_cancel_unknown_order() {
        let mut ledger = two_order_ledger();
        let before = ledger.clone();
        let result = ledger.cancel(&"ORD-404".into(), CancellationReason::CustomerChoice);
        assert_eq!(result, Err(LedgerError::NotFound("ORD-404".into())));
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_cancel_undeliverable_id_is_not_found() {
        let mut ledger = OrderLedger::new(
            vec![pending("ORD-001")],
            vec![UndeliverableOrder::new("ORD-006", "Alice Johnson", "555-0128")],
        )
        .unwrap();
        let result = ledger.cancel(&"ORD-006".into(), CancellationReason::OtherIncident);
        assert_eq!(result, Err(LedgerError::NotFound("ORD-006".into())));
    }

    #[test]
    fn test_double_cancel_keeps_first_reason() {
        let mut ledger = two_order_ledger();
        let id = OrderId::from("ORD-001");
        ledger.cancel(&id, CancellationReason::OtherIncident).unwrap();

        for reason in CancellationReason::ALL {
            let result = ledger.cancel(&id, reason);
            assert_eq!(result, Err(LedgerError::AlreadyCancelled(id.clone())));
        }
        assert_eq!(
            ledger.get(&id).and_then(DeliveryOrder::cancellation_reason),
            Some(CancellationReason::OtherIncident)
        );
    }

    #[test]
    fn test_cancel_changes_only_the_state() {
        let mut ledger = two_order_ledger();
        let id = OrderId::from("ORD-001");
        let before = ledger.get(&id).cloned().unwrap();
        let after = ledger.cancel(&id, CancellationReason::CustomerChoice).unwrap().clone();

        assert_eq!(after.order_id, before.order_id);
        assert_eq!(after.customer_name, before.customer_name);
        assert_eq!(after.phone_number, before.phone_number);
        assert_eq!(after.address, before.address);
        assert_eq!(after.items, before.items);
        assert!(!after.is_delivered());
    }

    #[test]
    fn test_list_keeps_insertion_order() {
        let ids = ["ORD-009", "ORD-001", "ORD-005"];
        let ledger = OrderLedger::new(ids.iter().map(|id| pending(id)).collect(), vec![]).unwrap();
        let listed: Vec<&str> = ledger.list().iter().map(|o| o.order_id.as_str()).collect();
        assert_eq!(listed, ids);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = OrderLedger::new(vec![pending("ORD-001"), pending("ORD-001")], vec![]);
        assert_eq!(result, Err(LedgerError::DuplicateOrder("ORD-001".into())));

        let result = OrderLedger::new(
            vec![pending("ORD-001")],
            vec![UndeliverableOrder::new("ORD-001", "Tom Davis", "555-0129")],
        );
        assert_eq!(result, Err(LedgerError::DuplicateOrder("ORD-001".into())));

        let result = OrderLedger::new(
            vec![],
            vec![
                UndeliverableOrder::new("ORD-006", "Alice Johnson", "555-0128"),
                UndeliverableOrder::new("ORD-006", "Tom Davis", "555-0129"),
            ],
        );
        assert_eq!(result, Err(LedgerError::DuplicateOrder("ORD-006".into())));
    }

    #[test]
    fn test_empty_ledger_summary() {
        let ledger = OrderLedger::default();
        assert!(ledger.is_empty());
        assert_eq!(ledger.status_summary().total(), 0);
    }

    #[test]
    fn test_sample_board_summary() {
        let ledger = OrderLedger::from_seed(sample_board()).unwrap();
        let summary = ledger.status_summary();
        assert_eq!(summary.count(StatusCategory::Delivered), 2);
        assert_eq!(summary.count(StatusCategory::Pending), 3);
        assert_eq!(summary.count(StatusCategory::Cancelled), 0);
        assert_eq!(summary.count(StatusCategory::Undeliverable), 2);
        assert_eq!(summary.total(), 7);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Cancel(usize, CancellationReason),
        CancelUnknown(CancellationReason),
    }

    fn reason_strategy() -> impl Strategy<Value = CancellationReason> {
        prop_oneof![
            Just(CancellationReason::CustomerChoice),
            Just(CancellationReason::OtherIncident),
        ]
    }

    fn op_strategy() -> impl Strategy<Value = Vec<Op>> {
        proptest::collection::vec(
            prop_oneof![
                4 => (0usize..24, reason_strategy()).prop_map(|(i, r)| Op::Cancel(i, r)),
                1 => reason_strategy().prop_map(Op::CancelUnknown),
            ],
            0..40,
        )
    }

    fn ledger_strategy() -> impl Strategy<Value = OrderLedger> {
        (proptest::collection::vec(any::<bool>(), 0..16), 0usize..6).prop_map(
            |(delivered, undeliverable)| {
                let orders = delivered
                    .iter()
                    .enumerate()
                    .map(|(i, &done)| {
                        let order = pending(&format!("ORD-{i:03}"));
                        if done { order.delivered() } else { order }
                    })
                    .collect();
                let undeliverable = (0..undeliverable)
                    .map(|i| UndeliverableOrder::new(format!("UND-{i:03}"), "Alice", "555-0128"))
                    .collect();
                OrderLedger::new(orders, undeliverable).unwrap()
            },
        )
    }

    proptest! {
        #[test]
        fn property_summary_partitions_all_orders(mut ledger in ledger_strategy(), ops in op_strategy()) {
            let total = ledger.list().len() + ledger.list_undeliverable().len();
            prop_assert_eq!(ledger.status_summary().total(), total);

            for op in ops {
                let before = ledger.clone();
                match op {
                    Op::Cancel(i, reason) => {
                        let id = OrderId(format!("ORD-{i:03}"));
                        let previous = ledger.get(&id).cloned();
                        let result = ledger.cancel(&id, reason).map(|o| o.clone());
                        match (previous, result) {
                            (None, Err(e)) => {
                                prop_assert_eq!(e, LedgerError::NotFound(id.clone()));
                                prop_assert_eq!(&ledger, &before);
                            }
                            (Some(prev), Err(LedgerError::InvalidTransition(_))) => {
                                prop_assert!(prev.is_delivered());
                                prop_assert_eq!(&ledger, &before);
                            }
                            (Some(prev), Err(LedgerError::AlreadyCancelled(_))) => {
                                prop_assert!(prev.is_cancelled());
                                prop_assert_eq!(&ledger, &before);
                            }
                            (Some(prev), Ok(order)) => {
                                prop_assert!(prev.is_pending());
                                prop_assert_eq!(order.cancellation_reason(), Some(reason));
                            }
                            (prev, result) => {
                                prop_assert!(false, "unexpected outcome {:?} for {:?}", result, prev);
                            }
                        }
                    }
                    Op::CancelUnknown(reason) => {
                        let id = OrderId::from("MISSING");
                        prop_assert_eq!(
                            ledger.cancel(&id, reason).map(|o| o.clone()),
                            Err(LedgerError::NotFound(id.clone()))
                        );
                    }
                }

                // Cancellation is monotonic: nothing cancelled before is un-cancelled or re-reasoned.
                for old in before.list() {
                    let now = ledger.get(&old.order_id).unwrap();
                    if old.is_cancelled() {
                        prop_assert_eq!(now.cancellation_reason(), old.cancellation_reason());
                    }
                    prop_assert!(!(now.is_delivered() && now.is_cancelled()));
                }
                prop_assert_eq!(ledger.status_summary().total(), total);
            }
        }
    }
}
