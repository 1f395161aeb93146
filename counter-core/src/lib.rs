//! # counter-core
//!
//! Order-management core for the counter POS: the menu catalog, the
//! order state store, the decimal totals calculator, and the
//! customer-form validation boundary.
//!
//! All state lives in one [`store::OrderStore`] owned by the caller;
//! views read snapshots, mutations go through [`shared::OrderCommand`].

pub mod catalog;
pub mod forms;
pub mod money;
pub mod store;

// Re-exports
pub use catalog::{CatalogError, MenuCatalog};
pub use forms::{CustomerForm, FormError};
pub use money::{OrderTotals, calculate_totals};
pub use store::OrderStore;
