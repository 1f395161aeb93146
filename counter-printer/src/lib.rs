//! # counter-printer
//!
//! Receipt layout for 58mm thermal paper - text layout only.
//!
//! ## Scope
//!
//! This crate handles WHAT a receipt looks like:
//! - Fixed-width ticket text building
//! - Receipt rendering from an order snapshot
//!
//! Triggering the actual print (browser dialog, printer driver, spooler)
//! is an external collaborator's job; this crate only produces the text.
//!
//! ## Example
//!
//! ```ignore
//! use counter_printer::ReceiptRenderer;
//!
//! let renderer = ReceiptRenderer::default();
//! let text = renderer.render(store.snapshot());
//! print_collaborator.print(&text);
//! ```

mod builder;
mod receipt;

// Re-exports
pub use builder::TicketBuilder;
pub use receipt::ReceiptRenderer;

/// 58mm paper fits 32 characters per line
pub const WIDTH_58MM: usize = 32;
