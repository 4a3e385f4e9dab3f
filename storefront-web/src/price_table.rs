//! Line totals for the product table.
//!
//! Each `<tr>` in the table body becomes a [`ProductRow`] at setup. The unit
//! price is read from the price cell once; the quantity is read from the row's
//! input on every stepper click and the product lands in the total cell.
use crate::dom;
use std::rc::Rc;
use storefront_core::{
    MIN_ROW_CELLS, PRICE_CELL, QUANTITY_CELL, RowPricing, StorefrontConfig, StorefrontError,
    TOTAL_CELL,
};
use web_sys::{Document, Element, HtmlInputElement};

const ROW_SELECTOR: &str = "tr";
const CELL_SELECTOR: &str = "td";
const STEPPER_SELECTOR: &str = "form button";
const QUANTITY_INPUT_SELECTOR: &str = "input";

pub struct ProductRow {
    pricing: RowPricing,
    /// Present whenever the row has stepper buttons.
    quantity_input: Option<HtmlInputElement>,
    total_cell: Element,
    steppers: Vec<Element>,
}

impl ProductRow {
    /// Build the record for one table row.
    ///
    /// A quantity cell without stepper buttons (a summary row, say) needs no
    /// input and binds nothing.
    ///
    /// # Errors
    /// Returns [`StorefrontError::MalformedRow`] if the row has too few cells or its
    /// quantity cell has stepper buttons but no input.
    pub fn from_row(index: usize, row: &Element) -> Result<Self, StorefrontError> {
        let cells = dom::select_all_within(row, CELL_SELECTOR)?;
        if cells.len() < MIN_ROW_CELLS {
            return Err(StorefrontError::MalformedRow {
                row: index,
                reason: format!("expected {MIN_ROW_CELLS} cells, found {}", cells.len()),
            });
        }

        let price_text = cells[PRICE_CELL].text_content().unwrap_or_default();
        let quantity_cell = &cells[QUANTITY_CELL];
        let steppers = dom::select_all_within(quantity_cell, STEPPER_SELECTOR)?;
        let quantity_input = if steppers.is_empty() {
            None
        } else {
            let input = dom::require_within(quantity_cell, QUANTITY_INPUT_SELECTOR)
                .and_then(|el| dom::cast_element::<HtmlInputElement>(el, QUANTITY_INPUT_SELECTOR))
                .map_err(|err| StorefrontError::MalformedRow {
                    row: index,
                    reason: err.to_string(),
                })?;
            Some(input)
        };

        Ok(Self {
            pricing: RowPricing::from_price_text(&price_text),
            quantity_input,
            total_cell: cells[TOTAL_CELL].clone(),
            steppers,
        })
    }

    #[must_use]
    pub const fn pricing(&self) -> RowPricing {
        self.pricing
    }

    #[must_use]
    pub fn stepper_count(&self) -> usize {
        self.steppers.len()
    }

    /// Write the current line total into the total cell.
    pub fn recompute(&self) {
        let Some(input) = &self.quantity_input else {
            return;
        };
        let total = self.pricing.line_total_text(&input.value());
        self.total_cell.set_text_content(Some(&total));
    }

    fn bind(self) -> Result<(), StorefrontError> {
        let row = Rc::new(self);
        for button in &row.steppers {
            let row = Rc::clone(&row);
            dom::on_click(button, move |_| row.recompute())?;
        }
        Ok(())
    }
}

/// Build a record for every row in `table_body`.
///
/// # Errors
/// Fails on the first malformed row.
pub fn collect_rows(table_body: &Element) -> Result<Vec<ProductRow>, StorefrontError> {
    dom::select_all_within(table_body, ROW_SELECTOR)?
        .iter()
        .enumerate()
        .map(|(index, row)| ProductRow::from_row(index, row))
        .collect()
}

/// Bind every stepper button in every table row.
///
/// # Errors
/// Returns an error if the table body is missing or any row is malformed.
pub fn bind(document: &Document, config: &StorefrontConfig) -> Result<(), StorefrontError> {
    let table_body = dom::require(document, &config.selectors.table_body)?;
    let rows = collect_rows(&table_body)?;
    log::debug!("binding {} product rows", rows.len());
    rows.into_iter().try_for_each(ProductRow::bind)
}
