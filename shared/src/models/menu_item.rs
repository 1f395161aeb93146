//! Menu Item Model

use serde::{Deserialize, Serialize};

/// Catalog entry for a purchasable item
///
/// Created once at startup from static configuration and never
/// mutated afterwards. The `id` is unique and stable within the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    /// Unit price (non-negative)
    pub price: f64,
    /// Category label (e.g. "Burgers", "Drinks")
    pub category: String,
}
