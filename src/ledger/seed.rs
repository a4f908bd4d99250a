//! Seed data for a ledger: the built-in sample board and the TOML seed file format.
//!
//! A seed file looks like this:
//!
//! ```toml
//! [[orders]]
//! order_id = "ORD-001"
//! customer_name = "John Smith"
//! phone_number = "555-0123"
//! address = "123 Main St, City, State"
//! items = ["Laptop", "Mouse"]
//!
//! [[orders]]
//! order_id = "ORD-002"
//! customer_name = "Jane Doe"
//! phone_number = "555-0124"
//! address = "456 Oak Ave, City, State"
//! delivered = true
//!
//! [[undeliverable]]
//! order_id = "ORD-006"
//! name = "Alice Johnson"
//! phone = "555-0128"
//! ```

use crate::ledger::LedgerError;
use crate::model::{CancellationReason, DeliveryOrder, OrderId, OrderState, UndeliverableOrder};
use serde::{Deserialize, Serialize};

/// Validated contents for a new [`OrderLedger`](crate::ledger::OrderLedger).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Seed {
    pub orders: Vec<DeliveryOrder>,
    pub undeliverable: Vec<UndeliverableOrder>,
}

/// On-disk seed layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedFile {
    #[serde(default)]
    pub orders: Vec<OrderRecord>,
    #[serde(default)]
    pub undeliverable: Vec<UndeliverableOrder>,
}

/// One deliverable order as written in a seed file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrderRecord {
    pub order_id: OrderId,
    pub customer_name: String,
    pub phone_number: String,
    pub address: String,
    #[serde(default)]
    pub items: Vec<String>,
    #[serde(default)]
    pub delivered: bool,
    #[serde(default)]
    pub cancelled: bool,
    #[serde(default)]
    pub cancellation_reason: Option<CancellationReason>,
}

impl TryFrom<OrderRecord> for DeliveryOrder {
    type Error = LedgerError;

    fn try_from(record: OrderRecord) -> Result<Self, Self::Error> {
        let invalid = |reason: &str| LedgerError::InvalidSeed {
            id: record.order_id.clone(),
            reason: reason.to_string(),
        };
        let state = match (record.delivered, record.cancelled, record.cancellation_reason) {
            (true, true, _) => return Err(invalid("order is both delivered and cancelled")),
            (_, true, None) => return Err(invalid("cancelled order has no cancellation reason")),
            (_, false, Some(_)) => {
                return Err(invalid(
                    "cancellation reason given for an order that is not cancelled",
                ));
            }
            (false, true, Some(reason)) => OrderState::Cancelled(reason),
            (true, false, None) => OrderState::Delivered,
            (false, false, None) => OrderState::Pending,
        };

        let mut order = DeliveryOrder::new(
            record.order_id,
            record.customer_name,
            record.phone_number,
            record.address,
            record.items,
        );
        order.set_state(state);
        Ok(order)
    }
}

impl SeedFile {
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Converts every record, stopping at the first invalid one.
    pub fn into_seed(self) -> Result<Seed, LedgerError> {
        let orders = self
            .orders
            .into_iter()
            .map(DeliveryOrder::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Seed {
            orders,
            undeliverable: self.undeliverable,
        })
    }
}

fn items(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

/// The board the delivery dashboard ships with: five deliverable orders (two
/// delivered) and two undeliverable ones.
pub fn sample_board() -> Seed {
    Seed {
        orders: vec![
            DeliveryOrder::new(
                "ORD-001",
                "John Smith",
                "555-0123",
                "123 Main St, City, State",
                items(&["Laptop", "Mouse"]),
            ),
            DeliveryOrder::new(
                "ORD-002",
                "Jane Doe",
                "555-0124",
                "456 Oak Ave, City, State",
                items(&["Monitor", "Keyboard", "Headphones"]),
            )
            .delivered(),
            DeliveryOrder::new(
                "ORD-003",
                "Mike Johnson",
                "555-0125",
                "789 Pine Rd, City, State",
                items(&["Smartphone", "Case", "Charger"]),
            ),
            DeliveryOrder::new(
                "ORD-004",
                "Sarah Wilson",
                "555-0126",
                "321 Elm St, City, State",
                items(&["Tablet", "Stylus"]),
            ),
            DeliveryOrder::new(
                "ORD-005",
                "Robert Brown",
                "555-0127",
                "654 Maple Dr, City, State",
                items(&["Printer", "Paper", "Ink"]),
            )
            .delivered(),
        ],
        undeliverable: vec![
            UndeliverableOrder::new("ORD-006", "Alice Johnson", "555-0128"),
            UndeliverableOrder::new("ORD-007", "Tom Davis", "555-0129"),
        ],
    }
}
