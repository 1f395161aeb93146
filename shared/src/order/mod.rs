//! Order state types
//!
//! The order aggregate (`OrderSnapshot`), its line items and customer
//! record, and the closed set of mutation commands applied by the store.

mod command;
mod snapshot;
mod types;

pub use command::OrderCommand;
pub use snapshot::OrderSnapshot;
pub use types::{CustomerDetails, CustomerUpdate, OrderLineItem};
