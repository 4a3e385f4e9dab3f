use std::cell::RefCell;
use std::rc::Rc;
use storefront_core::{StorefrontConfig, StorefrontError};
use storefront_web::purchase_guard::PageNavigator;
use storefront_web::app::{self, LoadPhase};
use storefront_web::dom;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

pub const HEADER: &str = r#"
<button id="menuBtn">Menu</button>
<ul class="nav_list"><li>Home</li></ul>
"#;

pub const PRODUCT_FORM: &str = r#"
<form class="quantity_form">
  <button type="button" id="minusBtn">-</button>
  <input type="text" value="5">
  <button type="button" id="plusBtn">+</button>
</form>
"#;

pub const TABLE: &str = r#"
<table><tbody class="tBody">
  <tr id="row-a">
    <td>Mug</td><td>20</td>
    <td><form onsubmit="return false"><button type="button" class="dec">-</button><input type="text" value="3"><button type="button" class="inc">+</button></form></td>
    <td class="total"></td>
  </tr>
  <tr id="row-b">
    <td>Tee</td><td>7.5</td>
    <td><form onsubmit="return false"><button type="button" class="inc">+</button><input type="text" value="2"></form></td>
    <td class="total"></td>
  </tr>
</tbody></table>
"#;

pub const MODAL: &str = r#"
<a href="/cart" class="buy_button" id="buy-1">Buy</a>
<button class="buy_button" id="buy-2">Buy now</button>
<div id="errorModal" style="display: none">
  <div class="modal-content" id="modal-content">
    <span class="close-btn">&times;</span>
    <p>No products available.</p>
  </div>
</div>
"#;

pub const PRODUCT_CARD: &str = r#"<div class="product_card">Mug</div>"#;

#[derive(Default)]
pub struct RecordingNavigator {
    pub visited: RefCell<Vec<String>>,
}

impl PageNavigator for RecordingNavigator {
    fn navigate(&self, path: &str) -> Result<(), StorefrontError> {
        self.visited.borrow_mut().push(path.to_string());
        Ok(())
    }
}

pub fn document() -> Document {
    dom::document().expect("document")
}

/// A product table row that only shows a figure: no input, no steppers.
pub const SUMMARY_ROW: &str = r#"<tr id="row-sum"><td>Total</td><td></td><td></td><td class="total">80</td></tr>"#;

pub fn full_page(extra: &str) -> String {
    format!("{HEADER}{PRODUCT_FORM}{TABLE}{MODAL}{extra}")
}

pub fn mount(markup: &str) -> Result<Rc<RecordingNavigator>, StorefrontError> {
    mount_with(markup, StorefrontConfig::default(), LoadPhase::Parsed)
}

pub fn mount_with(
    markup: &str,
    config: StorefrontConfig,
    phase: LoadPhase,
) -> Result<Rc<RecordingNavigator>, StorefrontError> {
    let doc = document();
    doc.body().expect("body").set_inner_html(markup);
    let navigator = Rc::new(RecordingNavigator::default());
    app::init_in_phase(
        &doc,
        Rc::new(config),
        Rc::clone(&navigator) as Rc<dyn PageNavigator>,
        phase,
    )?;
    Ok(navigator)
}

pub fn mount_ok(markup: &str) -> Rc<RecordingNavigator> {
    mount(markup).expect("page binds")
}

pub fn element(selector: &str) -> Element {
    document()
        .query_selector(selector)
        .expect("valid selector")
        .unwrap_or_else(|| panic!("missing {selector}"))
}

pub fn click(selector: &str) {
    element(selector)
        .dyn_into::<HtmlElement>()
        .expect("html element")
        .click();
}

pub fn input(selector: &str) -> HtmlInputElement {
    element(selector).dyn_into().expect("input element")
}

pub fn text(selector: &str) -> String {
    element(selector).text_content().unwrap_or_default()
}

pub fn modal_display() -> String {
    element("#errorModal")
        .dyn_into::<HtmlElement>()
        .expect("modal")
        .style()
        .get_property_value("display")
        .unwrap_or_default()
}
