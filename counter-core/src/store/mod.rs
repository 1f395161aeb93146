//! Order state store
//!
//! Owns the single mutable [`OrderSnapshot`] and provides the only
//! sanctioned mutation surface. Mutations arrive as [`OrderCommand`]
//! values and are dispatched with an exhaustive `match`, so an unknown
//! mutation kind is a compile-time impossibility rather than a runtime
//! fallback.
//!
//! The store is an owned object handed to whichever view needs it.
//! All mutations are synchronous; there is no concurrent writer.

use crate::money;
use shared::order::{OrderCommand, OrderSnapshot};
use shared::util::now_millis;
use tracing::debug;

/// Holds the current order and applies mutation commands
#[derive(Debug, Default)]
pub struct OrderStore {
    snapshot: OrderSnapshot,
}

impl OrderStore {
    /// Create a store with a fresh empty order
    pub fn new() -> Self {
        Self {
            snapshot: OrderSnapshot::new(),
        }
    }

    /// Apply a mutation command
    ///
    /// Every command succeeds: duplicates are allowed on add, removal of
    /// an absent item is a no-op, and customer updates merge field-wise.
    /// Derived totals are recomputed before the call returns, so readers
    /// never observe stale figures.
    pub fn apply(&mut self, command: OrderCommand) {
        match command {
            OrderCommand::AddItem { item } => {
                debug!(
                    item_id = item.id,
                    name = %item.name,
                    price = item.price,
                    "[Store] Add item"
                );
                self.snapshot.items.push((&item).into());
            }
            OrderCommand::RemoveItem { item_id } => {
                // Remove the first matching line item; later duplicates survive.
                match self.snapshot.items.iter().position(|line| line.id == item_id) {
                    Some(idx) => {
                        let removed = self.snapshot.items.remove(idx);
                        debug!(item_id, name = %removed.name, "[Store] Remove item");
                    }
                    None => {
                        debug!(item_id, "[Store] Remove item: no match, no-op");
                    }
                }
            }
            OrderCommand::UpdateCustomer { update } => {
                debug!(
                    name = ?update.name,
                    phone = ?update.phone,
                    address = ?update.address,
                    "[Store] Update customer"
                );
                self.snapshot.customer.merge(update);
            }
            OrderCommand::SetDiscount { amount } => {
                debug!(amount, "[Store] Set discount");
                self.snapshot.discount = amount;
            }
            OrderCommand::SetDeliveryCharge { amount } => {
                debug!(amount, "[Store] Set delivery charge");
                self.snapshot.delivery_charge = amount;
            }
        }

        money::recalculate_totals(&mut self.snapshot);
        self.snapshot.updated_at = now_millis();
    }

    /// Read the current order state
    ///
    /// Always reflects the most recently applied mutation; there is no
    /// caching between reads.
    pub fn snapshot(&self) -> &OrderSnapshot {
        &self.snapshot
    }

    /// Discard the current order and start a fresh one
    ///
    /// Used after the receipt is printed and the transaction closes.
    pub fn reset(&mut self) {
        debug!(order_id = self.snapshot.order_id, "[Store] Reset order");
        self.snapshot = OrderSnapshot::new();
    }
}

#[cfg(test)]
mod tests;
