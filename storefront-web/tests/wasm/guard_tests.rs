use crate::fixture::{PRODUCT_CARD, click, document, full_page, modal_display, mount_ok};
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn buy_without_products_shows_modal() {
    let navigator = mount_ok(&full_page(""));
    click("#buy-1");
    assert_eq!(modal_display(), "flex");
    assert!(navigator.visited.borrow().is_empty());
}

#[wasm_bindgen_test]
fn buy_with_products_navigates_to_cart() {
    let navigator = mount_ok(&full_page(PRODUCT_CARD));
    click("#buy-2");
    assert_eq!(navigator.visited.borrow().as_slice(), ["/cart".to_string()]);
    assert_eq!(modal_display(), "none");
}

#[wasm_bindgen_test]
fn product_presence_is_checked_on_every_click() {
    let navigator = mount_ok(&full_page(PRODUCT_CARD));
    click("#buy-1");
    assert_eq!(navigator.visited.borrow().len(), 1);

    if let Some(card) = document().query_selector(".product_card").expect("selector") {
        card.remove();
    }
    click("#buy-1");
    assert_eq!(navigator.visited.borrow().len(), 1);
    assert_eq!(modal_display(), "flex");
}

#[wasm_bindgen_test]
fn close_button_hides_modal() {
    mount_ok(&full_page(""));
    click("#buy-2");
    click(".close-btn");
    assert_eq!(modal_display(), "none");
}

#[wasm_bindgen_test]
fn backdrop_click_hides_but_content_click_does_not() {
    mount_ok(&full_page(""));
    click("#buy-2");
    click("#modal-content");
    assert_eq!(modal_display(), "flex");
    click("#errorModal");
    assert_eq!(modal_display(), "none");
}
