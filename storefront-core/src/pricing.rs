//! Per-row line totals for the product table.
use crate::numbers::{format_number, parse_int, to_number};

/// Cell positions inside a product table row.
pub const PRICE_CELL: usize = 1;
pub const QUANTITY_CELL: usize = 2;
pub const TOTAL_CELL: usize = 3;
/// Rows need at least this many cells to be priced.
pub const MIN_ROW_CELLS: usize = TOTAL_CELL + 1;

/// Unit price captured once when a row is set up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowPricing {
    unit_price: f64,
}

impl RowPricing {
    #[must_use]
    pub const fn new(unit_price: f64) -> Self {
        Self { unit_price }
    }

    /// Capture the unit price from the row's price cell text.
    #[must_use]
    pub fn from_price_text(text: &str) -> Self {
        Self::new(to_number(text))
    }

    #[must_use]
    pub const fn unit_price(&self) -> f64 {
        self.unit_price
    }

    /// Total for the quantity currently in the row's input.
    #[must_use]
    pub fn line_total(&self, quantity_text: &str) -> f64 {
        parse_int(quantity_text) * self.unit_price
    }

    /// Text written into the row's total cell.
    #[must_use]
    pub fn line_total_text(&self, quantity_text: &str) -> String {
        format_number(self.line_total(quantity_text))
    }
}
