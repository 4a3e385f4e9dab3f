//! Quantity stepper binding for the single product form.
use crate::dom;
use std::rc::Rc;
use storefront_core::{StepDirection, StepOutcome, StorefrontConfig, StorefrontError, step_quantity};
use web_sys::{Document, HtmlInputElement};

/// Bind the decrement and increment controls to the quantity input.
///
/// # Errors
/// Returns an error if either control or the input is missing.
pub fn bind(document: &Document, config: &Rc<StorefrontConfig>) -> Result<(), StorefrontError> {
    let minus = dom::require(document, &config.selectors.decrement)?;
    let plus = dom::require(document, &config.selectors.increment)?;
    let input: HtmlInputElement = dom::require_as(document, &config.selectors.quantity_input)?;

    for (control, direction) in [
        (minus, StepDirection::Decrement),
        (plus, StepDirection::Increment),
    ] {
        let input = input.clone();
        let config = Rc::clone(config);
        dom::on_click(&control, move |_| {
            apply_step(&input, direction, &config);
        })?;
    }
    Ok(())
}

/// Read the input, step it once, and write the result to its value and text.
pub fn apply_step(input: &HtmlInputElement, direction: StepDirection, config: &StorefrontConfig) {
    match step_quantity(&input.value(), direction, &config.stepper) {
        StepOutcome::Updated { text, .. } => {
            input.set_text_content(Some(&text));
            input.set_value(&text);
        }
        StepOutcome::Unchanged => {
            log::debug!("quantity left unchanged: non-numeric value rejected");
        }
    }
}
