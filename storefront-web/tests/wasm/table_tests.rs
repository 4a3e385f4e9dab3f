use crate::fixture::{
    HEADER, MODAL, PRODUCT_FORM, SUMMARY_ROW, TABLE, click, element, full_page, input,
    modal_display, mount_ok, text,
};
use storefront_web::price_table;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn stepper_click_writes_price_times_quantity() {
    mount_ok(&full_page(""));
    click("#row-a .inc");
    assert_eq!(text("#row-a .total"), "60");
}

#[wasm_bindgen_test]
fn rows_do_not_affect_each_other() {
    mount_ok(&full_page(""));
    click("#row-b .inc");
    assert_eq!(text("#row-b .total"), "15");
    assert_eq!(text("#row-a .total"), "");
}

#[wasm_bindgen_test]
fn total_tracks_edited_quantity() {
    mount_ok(&full_page(""));
    input("#row-a input").set_value("10");
    click("#row-a .dec");
    assert_eq!(text("#row-a .total"), "200");
}

#[wasm_bindgen_test]
fn unit_price_is_read_once_at_setup() {
    mount_ok(&full_page(""));
    let cells = element("#row-a").query_selector_all("td").expect("cells");
    cells
        .item(1)
        .expect("price cell")
        .set_text_content(Some("999"));
    click("#row-a .inc");
    assert_eq!(text("#row-a .total"), "60");
}

#[wasm_bindgen_test]
fn non_numeric_quantity_writes_nan() {
    mount_ok(&full_page(""));
    input("#row-a input").set_value("x");
    click("#row-a .inc");
    assert_eq!(text("#row-a .total"), "NaN");
}

fn page_with_summary_row() -> String {
    let table = TABLE.replace("</tbody>", &format!("{SUMMARY_ROW}</tbody>"));
    format!("{HEADER}{PRODUCT_FORM}{table}{MODAL}")
}

#[wasm_bindgen_test]
fn rows_capture_price_and_steppers_at_setup() {
    mount_ok(&full_page(""));
    let rows = price_table::collect_rows(&element(".tBody")).expect("rows");
    assert_eq!(rows.len(), 2);
    assert!((rows[0].pricing().unit_price() - 20.0).abs() < f64::EPSILON);
    assert_eq!(rows[0].stepper_count(), 2);
    assert!((rows[1].pricing().unit_price() - 7.5).abs() < f64::EPSILON);
    assert_eq!(rows[1].stepper_count(), 1);
}

#[wasm_bindgen_test]
fn row_without_steppers_binds_nothing() {
    mount_ok(&page_with_summary_row());
    let rows = price_table::collect_rows(&element(".tBody")).expect("rows");
    assert_eq!(rows[2].stepper_count(), 0);

    rows[2].recompute();
    click("#row-a .inc");
    assert_eq!(text("#row-sum .total"), "80");
    assert_eq!(text("#row-a .total"), "60");
}

#[wasm_bindgen_test]
fn summary_row_leaves_purchase_guard_bound() {
    mount_ok(&page_with_summary_row());
    click("#buy-2");
    assert_eq!(modal_display(), "flex");
}
