//! Line item and customer types

use crate::models::MenuItem;
use serde::{Deserialize, Serialize};

/// One instance of a catalog item placed into the order
///
/// There is no quantity field: adding the same catalog item twice
/// appends two independent line items, each billed at full price.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLineItem {
    /// Catalog item ID this line was built from
    pub id: i64,
    /// Name snapshot (catalog renames do not rewrite open orders)
    pub name: String,
    /// Unit price snapshot taken at insertion time
    pub price: f64,
    /// Category snapshot (for receipt grouping and statistics)
    pub category: String,
}

impl From<&MenuItem> for OrderLineItem {
    fn from(item: &MenuItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            price: item.price,
            category: item.category.clone(),
        }
    }
}

/// Customer record attached to the order
///
/// All fields are free text. Non-emptiness is enforced at the form
/// boundary, never by the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CustomerDetails {
    pub name: String,
    pub phone: String,
    pub address: String,
}

/// Merge patch for customer details
///
/// `None` leaves the existing field untouched; `Some` replaces it.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CustomerUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl CustomerDetails {
    /// Merge an update into this record, field by field
    pub fn merge(&mut self, update: CustomerUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
        if let Some(address) = update.address {
            self.address = address;
        }
    }

    /// Whether any field has been filled in
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.phone.is_empty() && self.address.is_empty()
    }
}
