//! Purchase-intent guard: buy buttons either continue to the cart or open the
//! "no products" modal, which closes from its close control or its backdrop.
use crate::dom;
use std::rc::Rc;
use storefront_core::{
    ModalClickTarget, ModalEvent, ModalState, PurchaseDecision, StorefrontConfig, StorefrontError,
    decide_purchase,
};
use wasm_bindgen::JsValue;
use web_sys::{Document, Event, EventTarget, HtmlElement};

/// Performs the full-page navigation to the cart.
pub trait PageNavigator {
    /// Navigate the current page to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the browser rejects the navigation.
    fn navigate(&self, path: &str) -> Result<(), StorefrontError>;
}

/// Navigates through `window.location`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocationNavigator;

impl PageNavigator for LocationNavigator {
    fn navigate(&self, path: &str) -> Result<(), StorefrontError> {
        dom::window()?
            .location()
            .set_href(path)
            .map_err(|err| dom::dom_error(&err))
    }
}

/// Read the modal's state back from its inline `display` value.
#[must_use]
pub fn modal_state_from_display(display: &str, config: &StorefrontConfig) -> ModalState {
    if display == config.modal_visible_display {
        ModalState::Visible
    } else {
        ModalState::Hidden
    }
}

struct Guard {
    document: Document,
    modal: HtmlElement,
    config: Rc<StorefrontConfig>,
    navigator: Rc<dyn PageNavigator>,
}

impl Guard {
    fn inline_display(&self) -> String {
        self.modal
            .style()
            .get_property_value("display")
            .unwrap_or_default()
    }

    fn transition(&self, event: ModalEvent) {
        let display = self.inline_display();
        let next = modal_state_from_display(&display, &self.config).apply(event);
        let wanted = next.display_value(&self.config);
        if display == wanted {
            return;
        }
        if let Err(err) = self.modal.style().set_property("display", wanted) {
            dom::console_error(&format!(
                "Failed to update modal: {}",
                dom::js_error_message(&err)
            ));
        }
    }

    fn on_buy(&self, event: &Event) {
        event.prevent_default();
        let product_present = dom::exists(&self.document, &self.config.selectors.product_card);
        match decide_purchase(product_present, &self.config) {
            PurchaseDecision::ShowModal => self.transition(ModalEvent::BuyWithoutProducts),
            PurchaseDecision::Navigate(request) => {
                if let Err(err) = self.navigator.navigate(&request.path) {
                    dom::console_error(&format!("Failed to open {}: {err}", request.path));
                }
            }
        }
    }

    fn click_target(&self, event: &Event) -> ModalClickTarget {
        let modal: &JsValue = self.modal.as_ref();
        let on_backdrop = event.target().is_some_and(|target| {
            let target: &JsValue = target.as_ref();
            target == modal
        });
        if on_backdrop {
            ModalClickTarget::Backdrop
        } else {
            ModalClickTarget::Elsewhere
        }
    }
}

/// Bind every buy button, the close control and the window-level backdrop listener.
///
/// # Errors
/// Returns an error if the modal or its close control is missing.
pub fn bind(
    document: &Document,
    config: &Rc<StorefrontConfig>,
    navigator: Rc<dyn PageNavigator>,
) -> Result<(), StorefrontError> {
    let buy_buttons = dom::select_all(document, &config.selectors.buy_button)?;
    let modal: HtmlElement = dom::require_as(document, &config.selectors.modal)?;
    let close = dom::require(document, &config.selectors.close_button)?;

    let guard = Rc::new(Guard {
        document: document.clone(),
        modal,
        config: Rc::clone(config),
        navigator,
    });

    for button in &buy_buttons {
        let guard = Rc::clone(&guard);
        dom::on_click(button, move |event| guard.on_buy(&event))?;
    }

    {
        let guard = Rc::clone(&guard);
        dom::on_click(&close, move |_| guard.transition(ModalEvent::CloseClicked))?;
    }

    let window: EventTarget = dom::window()?.into();
    dom::on_click(&window, move |event| {
        // Only the backdrop dismisses; other clicks leave the inline style alone.
        if let target @ ModalClickTarget::Backdrop = guard.click_target(&event) {
            guard.transition(ModalEvent::Clicked(target));
        }
    })?;

    log::debug!("purchase guard bound to {} buy buttons", buy_buttons.len());
    Ok(())
}
