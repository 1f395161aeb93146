//! Shared types for the counter POS core
//!
//! Common types used across the workspace: menu/catalog models,
//! order state types, mutation commands, and small utilities.

pub mod models;
pub mod order;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::MenuItem;
pub use order::{
    CustomerDetails, CustomerUpdate, OrderCommand, OrderLineItem, OrderSnapshot,
};
