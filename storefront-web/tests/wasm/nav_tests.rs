use crate::fixture::{click, element, full_page, mount_ok};
use storefront_core::StorefrontError;
use storefront_web::nav::toggle_pair;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn menu_click_toggles_trigger_and_list_together() {
    mount_ok(&full_page(""));
    for n in 1..=4_usize {
        click("#menuBtn");
        let expected = n % 2 == 1;
        assert_eq!(element("#menuBtn").class_list().contains("active"), expected);
        assert_eq!(element(".nav_list").class_list().contains("active"), expected);
    }
}

#[wasm_bindgen_test]
fn desynchronized_list_is_resynced_on_click() {
    mount_ok(&full_page(""));
    let _ = element(".nav_list").class_list().add_1("active");
    click("#menuBtn");
    assert!(element("#menuBtn").class_list().contains("active"));
    assert!(element(".nav_list").class_list().contains("active"));
}

#[wasm_bindgen_test]
fn toggle_pair_reports_rejected_class_token() {
    mount_ok(&full_page(""));
    let err = toggle_pair(&element("#menuBtn"), &element(".nav_list"), "is active")
        .expect_err("class tokens cannot contain spaces");
    assert!(matches!(err, StorefrontError::Dom(_)));
    assert!(!element("#menuBtn").class_list().contains("active"));
}

#[wasm_bindgen_test]
fn toggle_pair_returns_new_state() {
    mount_ok(&full_page(""));
    let (trigger, list) = (element("#menuBtn"), element(".nav_list"));
    assert!(toggle_pair(&trigger, &list, "active").expect("toggle"));
    assert!(!toggle_pair(&trigger, &list, "active").expect("toggle"));
}
