//! Ticket text builder
//!
//! Provides a fluent API for building fixed-width ticket text.

/// Fixed-width ticket text builder
///
/// Lines longer than the paper width are kept as-is; physical wrapping
/// is the printer's concern.
pub struct TicketBuilder {
    buf: String,
    width: usize,
}

impl TicketBuilder {
    /// Create a new builder with the specified paper width in characters
    ///
    /// Common widths:
    /// - 58mm paper: 32 characters
    /// - 80mm paper: 48 characters
    pub fn new(width: usize) -> Self {
        Self {
            buf: String::with_capacity(1024),
            width,
        }
    }

    /// Get the configured paper width
    pub fn width(&self) -> usize {
        self.width
    }

    // === Text Output ===

    /// Write text followed by newline
    pub fn line(&mut self, s: &str) -> &mut Self {
        self.buf.push_str(s);
        self.buf.push('\n');
        self
    }

    /// Write empty line
    pub fn newline(&mut self) -> &mut Self {
        self.buf.push('\n');
        self
    }

    /// Write text centered within the paper width
    pub fn center(&mut self, s: &str) -> &mut Self {
        let len = s.chars().count();
        if len >= self.width {
            return self.line(s);
        }
        let pad = (self.width - len) / 2;
        self.buf.push_str(&" ".repeat(pad));
        self.line(s)
    }

    // === Separators ===

    /// Print a line of '=' characters
    pub fn sep_double(&mut self) -> &mut Self {
        self.line(&"=".repeat(self.width))
    }

    /// Print a line of '-' characters
    pub fn sep_single(&mut self) -> &mut Self {
        self.line(&"-".repeat(self.width))
    }

    // === Layout Helpers ===

    /// Print left and right text on the same line
    ///
    /// Left text is left-aligned, right text is right-aligned,
    /// with spaces filling the gap.
    pub fn line_lr(&mut self, left: &str, right: &str) -> &mut Self {
        let lw = left.chars().count();
        let rw = right.chars().count();

        if lw + rw >= self.width {
            // Too long, just print with space
            self.buf.push_str(left);
            self.buf.push(' ');
            self.line(right)
        } else {
            let spaces = self.width - lw - rw;
            self.buf.push_str(left);
            self.buf.push_str(&" ".repeat(spaces));
            self.line(right)
        }
    }

    // === Build ===

    /// Build the final ticket text
    pub fn build(self) -> String {
        self.buf
    }
}
