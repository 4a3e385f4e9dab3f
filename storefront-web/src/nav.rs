//! Menu trigger binding.
use crate::dom;
use storefront_core::{NavState, StorefrontConfig, StorefrontError};
use web_sys::{Document, Element};

/// Bind the menu trigger so each click toggles the active class on it and the nav list.
///
/// # Errors
/// Returns an error if the trigger or the list is missing.
pub fn bind(document: &Document, config: &StorefrontConfig) -> Result<(), StorefrontError> {
    let trigger = dom::require(document, &config.selectors.menu_trigger)?;
    let list = dom::require(document, &config.selectors.nav_list)?;
    let class = config.active_class.clone();
    let target = trigger.clone();
    dom::on_click(&target, move |_| match toggle_pair(&trigger, &list, &class) {
        Ok(active) => log::debug!("navigation active: {active}"),
        Err(err) => dom::console_error(&format!("Failed to toggle navigation: {err}")),
    })
}

/// Flip the trigger's state and force the list to match it.
///
/// # Errors
/// Returns a DOM error if the browser rejects `class` as a token.
pub fn toggle_pair(trigger: &Element, list: &Element, class: &str) -> Result<bool, StorefrontError> {
    let mut nav = NavState::new(trigger.class_list().contains(class));
    let active = nav.toggle();
    for element in [trigger, list] {
        element
            .class_list()
            .toggle_with_force(class, active)
            .map_err(|err| dom::dom_error(&err))?;
    }
    Ok(active)
}
