use crate::fixture::{
    HEADER, MODAL, PRODUCT_FORM, RecordingNavigator, TABLE, click, document, element, full_page,
    modal_display, mount, mount_with,
};
use storefront_core::{StorefrontConfig, StorefrontError};
use storefront_web::app::LoadPhase;
use wasm_bindgen_test::*;
use web_sys::Event;

#[wasm_bindgen_test]
fn missing_menu_trigger_is_fatal() {
    let markup = format!("<ul class=\"nav_list\"></ul>{PRODUCT_FORM}{TABLE}{MODAL}");
    let err = mount(&markup).err().expect("startup fails");
    assert!(matches!(
        err,
        StorefrontError::MissingElement { ref selector } if selector == "#menuBtn"
    ));
}

#[wasm_bindgen_test]
fn missing_table_body_is_fatal() {
    let markup = format!("{HEADER}{PRODUCT_FORM}{MODAL}");
    let err = mount(&markup).err().expect("startup fails");
    assert!(err.to_string().contains(".tBody"));
}

#[wasm_bindgen_test]
fn short_row_is_reported_with_its_index() {
    let table = r#"<table><tbody class="tBody"><tr><td>Mug</td><td>20</td></tr></tbody></table>"#;
    let markup = format!("{HEADER}{PRODUCT_FORM}{table}{MODAL}");
    let err = mount(&markup).err().expect("startup fails");
    assert!(matches!(err, StorefrontError::MalformedRow { row: 0, .. }));
}

#[wasm_bindgen_test]
fn missing_modal_is_fatal() {
    let markup = format!("{HEADER}{PRODUCT_FORM}{TABLE}");
    let err = mount(&markup).err().expect("startup fails");
    assert!(err.to_string().contains("#errorModal"));
}

#[wasm_bindgen_test]
fn stepper_row_without_input_is_fatal() {
    let table = r#"<table><tbody class="tBody">
      <tr><td>Mug</td><td>20</td><td><form><button type="button">+</button></form></td><td></td></tr>
    </tbody></table>"#;
    let markup = format!("{HEADER}{PRODUCT_FORM}{table}{MODAL}");
    let err = mount(&markup).err().expect("startup fails");
    assert!(
        matches!(err, StorefrontError::MalformedRow { row: 0, ref reason } if reason.contains("input")),
        "{err}"
    );
}

#[wasm_bindgen_test]
fn parsed_document_binds_guard_immediately() {
    assert_eq!(LoadPhase::of(&document()), LoadPhase::Parsed);
    mount(&full_page("")).expect("page binds");
    click("#buy-1");
    assert_eq!(modal_display(), "flex");
}

#[wasm_bindgen_test]
fn loading_document_defers_guard_until_content_loaded() {
    let navigator: std::rc::Rc<RecordingNavigator> =
        mount_with(&full_page(""), StorefrontConfig::default(), LoadPhase::Loading)
            .expect("page binds");

    click("#buy-1");
    assert_eq!(modal_display(), "none");

    click("#menuBtn");
    assert!(element("#menuBtn").class_list().contains("active"));

    let loaded = Event::new("DOMContentLoaded").expect("event");
    document().dispatch_event(&loaded).expect("dispatch");
    click("#buy-1");
    assert_eq!(modal_display(), "flex");

    document().dispatch_event(&loaded).expect("dispatch again");
    click(".close-btn");
    assert_eq!(modal_display(), "none");
    assert!(navigator.visited.borrow().is_empty());
}
