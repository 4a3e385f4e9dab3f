use storefront_core::StorefrontError;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, NodeList, Window};

/// Retrieve the global `window` object.
///
/// # Errors
/// Returns an error when executed outside of a browser context.
pub fn window() -> Result<Window, StorefrontError> {
    web_sys::window().ok_or_else(|| StorefrontError::Dom("`window` is unavailable".to_string()))
}

/// Retrieve the document object for DOM interactions.
///
/// # Errors
/// Returns an error when the document cannot be accessed from the current window.
pub fn document() -> Result<Document, StorefrontError> {
    window()?
        .document()
        .ok_or_else(|| StorefrontError::Dom("`document` is unavailable".to_string()))
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Wrap a thrown JavaScript value.
#[must_use]
pub fn dom_error(value: &JsValue) -> StorefrontError {
    StorefrontError::Dom(js_error_message(value))
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}

/// Find the first element matching `selector`, failing if there is none.
///
/// # Errors
/// Returns [`StorefrontError::MissingElement`] when nothing matches, or a DOM error
/// for an invalid selector.
pub fn require(document: &Document, selector: &str) -> Result<Element, StorefrontError> {
    document
        .query_selector(selector)
        .map_err(|err| dom_error(&err))?
        .ok_or_else(|| StorefrontError::missing(selector))
}

/// Like [`require`], scoped to the descendants of `parent`.
///
/// # Errors
/// Returns [`StorefrontError::MissingElement`] when nothing matches.
pub fn require_within(parent: &Element, selector: &str) -> Result<Element, StorefrontError> {
    parent
        .query_selector(selector)
        .map_err(|err| dom_error(&err))?
        .ok_or_else(|| StorefrontError::missing(selector))
}

/// Find a required element and cast it to a concrete element type.
///
/// # Errors
/// Returns an error when the element is missing or has an unexpected type.
pub fn require_as<T: JsCast>(document: &Document, selector: &str) -> Result<T, StorefrontError> {
    cast_element(require(document, selector)?, selector)
}

/// Cast an element, naming `selector` in the error.
///
/// # Errors
/// Returns a DOM error when the element is not a `T`.
pub fn cast_element<T: JsCast>(element: Element, selector: &str) -> Result<T, StorefrontError> {
    element.dyn_into::<T>().map_err(|el| {
        StorefrontError::Dom(format!(
            "`{selector}` matched an unexpected <{}> element",
            el.tag_name().to_lowercase()
        ))
    })
}

/// All elements in the document matching `selector`, in document order.
///
/// # Errors
/// Returns a DOM error for an invalid selector.
pub fn select_all(document: &Document, selector: &str) -> Result<Vec<Element>, StorefrontError> {
    document
        .query_selector_all(selector)
        .map(|list| node_list_elements(&list))
        .map_err(|err| dom_error(&err))
}

/// All descendants of `parent` matching `selector`, in document order.
///
/// # Errors
/// Returns a DOM error for an invalid selector.
pub fn select_all_within(parent: &Element, selector: &str) -> Result<Vec<Element>, StorefrontError> {
    parent
        .query_selector_all(selector)
        .map(|list| node_list_elements(&list))
        .map_err(|err| dom_error(&err))
}

/// Whether at least one element currently matches `selector`.
#[must_use]
pub fn exists(document: &Document, selector: &str) -> bool {
    matches!(document.query_selector(selector), Ok(Some(_)))
}

fn node_list_elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|idx| list.item(idx))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Attach `handler` to `event` on `target` for the lifetime of the page.
///
/// # Errors
/// Returns a DOM error if the listener cannot be registered.
pub fn add_listener(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), StorefrontError> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|err| dom_error(&err))?;
    closure.forget();
    Ok(())
}

/// Attach a click handler to `target` for the lifetime of the page.
///
/// # Errors
/// Returns a DOM error if the listener cannot be registered.
pub fn on_click(
    target: &EventTarget,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), StorefrontError> {
    add_listener(target, "click", handler)
}
