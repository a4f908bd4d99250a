//! Deliverable orders and their cancellation reasons.
//!
//! The delivered and cancelled flags live in a single [`OrderState`], so an order
//! that is both delivered and cancelled cannot be represented.
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for orders (e.g. `ORD-001`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub String);

impl OrderId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for OrderId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Why an order was cancelled. The dashboard offers exactly these two choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CancellationReason {
    CustomerChoice,
    OtherIncident,
}

impl CancellationReason {
    /// Every reason, in the order the dialog lists them.
    pub const ALL: [CancellationReason; 2] = [
        CancellationReason::CustomerChoice,
        CancellationReason::OtherIncident,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CancellationReason::CustomerChoice => "Customer Choice",
            CancellationReason::OtherIncident => "Other Incident",
        }
    }
}

impl Display for CancellationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for CancellationReason {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer-choice" => Ok(CancellationReason::CustomerChoice),
            "other-incident" => Ok(CancellationReason::OtherIncident),
            other => Err(format!(
                "unknown cancellation reason '{other}' (expected customer-choice or other-incident)"
            )),
        }
    }
}

/// Delivery state of an order. Both transitions out of `Pending` are one-way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderState {
    #[default]
    Pending,
    Delivered,
    Cancelled(CancellationReason),
}

/// An order scheduled for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryOrder {
    pub order_id: OrderId,
    pub customer_name: String,
    pub phone_number: String,
    pub address: String,
    pub items: Vec<String>,
    state: OrderState,
}

impl DeliveryOrder {
    /// Creates a pending order.
    ///
    /// # Arguments
    /// * `order_id` - Identifier, unique within a ledger
    /// * `customer_name` - Name shown in the orders table
    /// * `phone_number` - Contact number
    /// * `address` - Delivery address
    /// * `items` - Product names, informational only
    pub fn new(
        order_id: impl Into<OrderId>,
        customer_name: impl Into<String>,
        phone_number: impl Into<String>,
        address: impl Into<String>,
        items: Vec<String>,
    ) -> Self {
        Self {
            order_id: order_id.into(),
            customer_name: customer_name.into(),
            phone_number: phone_number.into(),
            address: address.into(),
            items,
            state: OrderState::Pending,
        }
    }

    /// Returns the same order marked as delivered. Only used when seeding.
    pub fn delivered(mut self) -> Self {
        self.state = OrderState::Delivered;
        self
    }

    pub fn state(&self) -> OrderState {
        self.state
    }

    pub fn is_delivered(&self) -> bool {
        matches!(self.state, OrderState::Delivered)
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self.state, OrderState::Cancelled(_))
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, OrderState::Pending)
    }

    /// Present if and only if the order is cancelled.
    pub fn cancellation_reason(&self) -> Option<CancellationReason> {
        match self.state {
            OrderState::Cancelled(reason) => Some(reason),
            _ => None,
        }
    }

    pub(crate) fn set_state(&mut self, state: OrderState) {
        self.state = state;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_order_is_pending() {
        let order = DeliveryOrder::new("ORD-001", "John Smith", "555-0123", "123 Main St", vec![]);
        assert!(order.is_pending());
        assert!(!order.is_delivered());
        assert!(!order.is_cancelled());
        assert_eq!(order.cancellation_reason(), None);
    }

    #[test]
    fn test_reason_parses_kebab_case() {
        assert_eq!(
            "customer-choice".parse::<CancellationReason>(),
            Ok(CancellationReason::CustomerChoice)
        );
        assert_eq!(
            "other-incident".parse::<CancellationReason>(),
            Ok(CancellationReason::OtherIncident)
        );
        assert!("refund".parse::<CancellationReason>().is_err());
    }

    #[test]
    fn test_reason_labels() {
        assert_eq!(CancellationReason::CustomerChoice.to_string(), "Customer Choice");
        assert_eq!(CancellationReason::OtherIncident.to_string(), "Other Incident");
    }
}
