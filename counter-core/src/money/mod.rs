//! Money calculation utilities using rust_decimal for precision
//!
//! All arithmetic is done with `Decimal` internally, then converted back
//! to `f64` for storage/serialization, rounded half-up to two decimal
//! places. The calculator is pure: identical inputs yield identical
//! outputs, and degenerate inputs (empty order) yield zeros rather than
//! errors, since it feeds a live UI that must never crash on transient
//! empty state.

use rust_decimal::prelude::*;
use serde::Serialize;
use shared::order::{OrderLineItem, OrderSnapshot};

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Computed billable figures for an order
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Default)]
pub struct OrderTotals {
    /// Sum of line-item prices before adjustments
    pub subtotal: f64,
    /// subtotal - discount + delivery_charge
    pub total: f64,
}

/// Convert f64 to Decimal for calculation
///
/// Non-finite values should not reach monetary code; if one does, log it
/// and treat it as zero instead of corrupting downstream totals.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "Non-finite f64 in monetary calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or(0.0)
}

/// Calculate order totals from line items and adjustments
///
/// Formula:
/// - `subtotal` = sum of line-item prices (zero for an empty order)
/// - `total` = subtotal - discount + delivery_charge
///
/// Discount and delivery charge are plain signed values; a negative
/// discount acts as a surcharge and is not special-cased.
pub fn calculate_totals(items: &[OrderLineItem], discount: f64, delivery_charge: f64) -> OrderTotals {
    let subtotal: Decimal = items.iter().map(|item| to_decimal(item.price)).sum();
    let total = subtotal - to_decimal(discount) + to_decimal(delivery_charge);

    OrderTotals {
        subtotal: to_f64(subtotal),
        total: to_f64(total),
    }
}

/// Recalculate the derived totals of a snapshot in place
///
/// The store calls this after every mutation so readers always observe
/// totals consistent with the item list and adjustments.
pub fn recalculate_totals(snapshot: &mut OrderSnapshot) {
    let totals = calculate_totals(&snapshot.items, snapshot.discount, snapshot.delivery_charge);
    snapshot.subtotal = totals.subtotal;
    snapshot.total = totals.total;
}
