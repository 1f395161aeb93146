//! Order snapshot - the aggregate state read by every view

use super::types::{CustomerDetails, OrderLineItem};
use crate::util::{now_millis, snowflake_id};
use serde::{Deserialize, Serialize};

/// The current in-progress order
///
/// Created empty at session start, mutated in place by the store for the
/// lifetime of the session, and never persisted. `subtotal` and `total`
/// are derived fields, recomputed by the store after every mutation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderSnapshot {
    /// Order ID (snowflake, assigned at creation)
    pub order_id: i64,
    /// Line items in insertion order; duplicates allowed
    pub items: Vec<OrderLineItem>,
    /// Customer record (merge-updated, never partially cleared)
    pub customer: CustomerDetails,
    /// Discount amount (signed; negative means surcharge)
    #[serde(default)]
    pub discount: f64,
    /// Delivery charge amount
    #[serde(default)]
    pub delivery_charge: f64,
    /// Sum of line-item prices (computed)
    pub subtotal: f64,
    /// subtotal - discount + delivery_charge (computed)
    pub total: f64,
    /// Creation timestamp (millis UTC)
    pub created_at: i64,
    /// Last mutation timestamp (millis UTC)
    pub updated_at: i64,
}

impl OrderSnapshot {
    /// Create a new empty order
    pub fn new() -> Self {
        let now = now_millis();
        Self {
            order_id: snowflake_id(),
            items: Vec::new(),
            customer: CustomerDetails::default(),
            discount: 0.0,
            delivery_charge: 0.0,
            subtotal: 0.0,
            total: 0.0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the order has no line items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of line items (duplicates counted individually)
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

impl Default for OrderSnapshot {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_order_is_empty() {
        let order = OrderSnapshot::new();
        assert!(order.is_empty());
        assert_eq!(order.item_count(), 0);
        assert_eq!(order.subtotal, 0.0);
        assert_eq!(order.total, 0.0);
        assert_eq!(order.created_at, order.updated_at);
    }
}
