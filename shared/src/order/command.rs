//! Order mutation commands
//!
//! Mutation intents are modeled as a closed tagged union rather than
//! string-tagged requests. Dispatch is an exhaustive `match` in the store,
//! so an unrecognized mutation kind cannot exist at runtime.

use super::CustomerUpdate;
use crate::models::MenuItem;
use serde::{Deserialize, Serialize};

/// A mutation intent against the order store
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderCommand {
    /// Append a line item built from the given catalog entry.
    /// Duplicates are allowed; always succeeds.
    AddItem { item: MenuItem },
    /// Remove the first line item matching `item_id`.
    /// Later duplicates survive. A no-op when nothing matches.
    RemoveItem { item_id: i64 },
    /// Merge the given fields into the customer record.
    UpdateCustomer { update: CustomerUpdate },
    /// Replace the discount amount. A negative value is a surcharge;
    /// the calculator does not special-case the sign.
    SetDiscount { amount: f64 },
    /// Replace the delivery charge amount.
    SetDeliveryCharge { amount: f64 },
}
