//! Menu catalog
//!
//! The fixed list of purchasable items. Loaded once at startup from
//! static JSON configuration and read-only afterwards. The store trusts
//! catalog entries handed to it; validation happens here, at load time.

use shared::MenuItem;
use thiserror::Error;
use tracing::info;

/// Built-in menu configuration shipped with the binary
const BUILTIN_MENU: &str = include_str!("../menu.json");

/// Catalog load error
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to decode menu configuration: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("menu item {id} ('{name}') has negative price {price}")]
    NegativePrice { id: i64, name: String, price: f64 },

    #[error("duplicate menu item id {id}")]
    DuplicateId { id: i64 },
}

/// Read-only menu catalog
#[derive(Debug, Clone)]
pub struct MenuCatalog {
    items: Vec<MenuItem>,
}

impl MenuCatalog {
    /// Load the catalog shipped with the binary
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_MENU)
    }

    /// Load a catalog from a JSON array of menu items
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let items: Vec<MenuItem> = serde_json::from_str(json)?;
        Self::from_items(items)
    }

    /// Build a catalog from already-decoded items
    pub fn from_items(items: Vec<MenuItem>) -> Result<Self, CatalogError> {
        let mut seen = std::collections::HashSet::new();
        for item in &items {
            if item.price < 0.0 || !item.price.is_finite() {
                return Err(CatalogError::NegativePrice {
                    id: item.id,
                    name: item.name.clone(),
                    price: item.price,
                });
            }
            if !seen.insert(item.id) {
                return Err(CatalogError::DuplicateId { id: item.id });
            }
        }

        info!(item_count = items.len(), "Menu catalog loaded");
        Ok(Self { items })
    }

    /// All items, in configuration order
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Look up an item by ID
    pub fn get(&self, id: i64) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Category labels in first-appearance order, deduplicated
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        self.items
            .iter()
            .filter(|item| seen.insert(item.category.as_str()))
            .map(|item| item.category.as_str())
            .collect()
    }

    /// Items belonging to the given category
    pub fn items_in(&self, category: &str) -> impl Iterator<Item = &MenuItem> {
        self.items.iter().filter(move |item| item.category == category)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
