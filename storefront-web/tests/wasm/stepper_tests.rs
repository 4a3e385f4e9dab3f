use crate::fixture::{click, full_page, input, mount_ok, mount_with};
use storefront_core::{StepDirection, StepperPolicy, StorefrontConfig};
use storefront_web::app::LoadPhase;
use storefront_web::stepper::apply_step;
use wasm_bindgen_test::*;

const QTY: &str = ".quantity_form input";

#[wasm_bindgen_test]
fn decrement_twice_from_five_reaches_three() {
    mount_ok(&full_page(""));
    click("#minusBtn");
    click("#minusBtn");
    let field = input(QTY);
    assert_eq!(field.value(), "3");
    assert_eq!(field.text_content().unwrap_or_default(), "3");
}

#[wasm_bindgen_test]
fn increment_adds_one() {
    mount_ok(&full_page(""));
    input(QTY).set_value("41");
    click("#plusBtn");
    assert_eq!(input(QTY).value(), "42");
}

#[wasm_bindgen_test]
fn decrement_below_zero_is_not_clamped() {
    mount_ok(&full_page(""));
    input(QTY).set_value("0");
    click("#minusBtn");
    assert_eq!(input(QTY).value(), "-1");
}

#[wasm_bindgen_test]
fn non_numeric_value_writes_nan() {
    mount_ok(&full_page(""));
    input(QTY).set_value("many");
    click("#plusBtn");
    assert_eq!(input(QTY).value(), "NaN");
}

fn mount_with_policy(policy: StepperPolicy) {
    let config = StorefrontConfig {
        stepper: policy,
        ..StorefrontConfig::default()
    };
    mount_with(&full_page(""), config, LoadPhase::Parsed).expect("page binds");
}

#[wasm_bindgen_test]
fn floor_policy_holds_quantity_at_minimum() {
    mount_with_policy(StepperPolicy {
        min_quantity: Some(1),
        ..StepperPolicy::default()
    });
    input(QTY).set_value("2");
    click("#minusBtn");
    click("#minusBtn");
    assert_eq!(input(QTY).value(), "1");
    click("#plusBtn");
    assert_eq!(input(QTY).value(), "2");
}

#[wasm_bindgen_test]
fn reject_policy_leaves_non_numeric_value_alone() {
    mount_with_policy(StepperPolicy {
        reject_non_numeric: true,
        ..StepperPolicy::default()
    });
    input(QTY).set_value("many");
    click("#plusBtn");
    assert_eq!(input(QTY).value(), "many");
}

#[wasm_bindgen_test]
fn apply_step_writes_value_and_text() {
    mount_ok(&full_page(""));
    let field = input(QTY);
    field.set_value("9");
    apply_step(&field, StepDirection::Increment, &StorefrontConfig::default());
    assert_eq!(field.value(), "10");
    assert_eq!(field.text_content().unwrap_or_default(), "10");
}
