use crate::model::OrderId;
use serde::{Deserialize, Serialize};

/// An order that could not be scheduled for delivery at all.
///
/// Undeliverable orders are read-only; no transitions are defined between them
/// and [`DeliveryOrder`](crate::model::DeliveryOrder)s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UndeliverableOrder {
    pub order_id: OrderId,
    pub name: String,
    pub phone: String,
}

impl UndeliverableOrder {
    pub fn new(
        order_id: impl Into<OrderId>,
        name: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            order_id: order_id.into(),
            name: name.into(),
            phone: phone.into(),
        }
    }
}
