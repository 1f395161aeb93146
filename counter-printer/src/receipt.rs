//! Receipt renderer
//!
//! Renders an order snapshot into receipt text for thermal paper.

use crate::{TicketBuilder, WIDTH_58MM};
use chrono::{TimeZone, Utc};
use shared::order::OrderSnapshot;
use tracing::debug;

/// Receipt renderer
///
/// Lays out the store header, customer block, line items, and the
/// totals block for a fixed-width ticket.
pub struct ReceiptRenderer {
    width: usize,
    store_name: String,
}

impl ReceiptRenderer {
    /// Create a renderer with the given paper width and store name
    pub fn new(width: usize, store_name: impl Into<String>) -> Self {
        Self {
            width,
            store_name: store_name.into(),
        }
    }

    /// Render an order snapshot into receipt text
    pub fn render(&self, order: &OrderSnapshot) -> String {
        debug!(
            order_id = order.order_id,
            item_count = order.item_count(),
            total = order.total,
            "Rendering receipt"
        );

        let mut b = TicketBuilder::new(self.width);

        self.render_header(&mut b, order);
        self.render_customer(&mut b, order);
        self.render_items(&mut b, order);
        self.render_totals(&mut b, order);
        self.render_footer(&mut b);

        b.build()
    }

    /// Header: store name, order id, timestamp
    fn render_header(&self, b: &mut TicketBuilder, order: &OrderSnapshot) {
        b.center(&self.store_name);
        b.center(&format!("Order #{}", order.order_id));
        b.center(&format_timestamp(order.created_at));
        b.sep_double();
    }

    /// Customer block, skipped entirely when nothing was captured
    fn render_customer(&self, b: &mut TicketBuilder, order: &OrderSnapshot) {
        let customer = &order.customer;
        if customer.is_empty() {
            return;
        }

        if !customer.name.is_empty() {
            b.line(&format!("Name: {}", customer.name));
        }
        if !customer.phone.is_empty() {
            b.line(&format!("Phone: {}", customer.phone));
        }
        if !customer.address.is_empty() {
            b.line(&format!("Addr: {}", customer.address));
        }
        b.sep_single();
    }

    /// One line per line item: name left, price right
    fn render_items(&self, b: &mut TicketBuilder, order: &OrderSnapshot) {
        for item in &order.items {
            b.line_lr(&item.name, &format_amount(item.price));
        }
        if order.is_empty() {
            b.center("(no items)");
        }
        b.sep_single();
    }

    /// Totals block: subtotal, adjustments (only when set), total
    fn render_totals(&self, b: &mut TicketBuilder, order: &OrderSnapshot) {
        b.line_lr("Subtotal", &format_amount(order.subtotal));
        if order.discount != 0.0 {
            // Shown as its effect on the total, so a surcharge
            // (negative discount) prints as a positive amount
            b.line_lr("Discount", &format_amount(-order.discount));
        }
        if order.delivery_charge != 0.0 {
            b.line_lr("Delivery", &format_amount(order.delivery_charge));
        }
        b.sep_double();
        b.line_lr("TOTAL", &format_amount(order.total));
    }

    fn render_footer(&self, b: &mut TicketBuilder) {
        b.newline();
        b.center("Thank you!");
        b.newline();
    }
}

impl Default for ReceiptRenderer {
    fn default() -> Self {
        Self::new(WIDTH_58MM, "COUNTER POS")
    }
}

/// Format a millisecond UTC timestamp as "YYYY-MM-DD HH:MM"
fn format_timestamp(millis: i64) -> String {
    match Utc.timestamp_millis_opt(millis).single() {
        Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        None => String::new(),
    }
}

/// Two-decimal display formatting, applied only at this boundary
fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}
