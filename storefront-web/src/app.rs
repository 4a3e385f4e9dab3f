//! Page startup: binds every behavior in order and stops at the first failure.
use crate::purchase_guard::{LocationNavigator, PageNavigator};
use crate::{dom, nav, price_table, purchase_guard, stepper};
use std::rc::Rc;
use storefront_core::{StorefrontConfig, StorefrontError};
use web_sys::Document;

/// How far the document has been parsed when the script starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    /// Still parsing; `DOMContentLoaded` has not fired yet.
    Loading,
    Parsed,
}

impl LoadPhase {
    #[must_use]
    pub fn of(document: &Document) -> Self {
        if document.ready_state() == "loading" {
            Self::Loading
        } else {
            Self::Parsed
        }
    }
}

/// Bind the storefront script to the current document.
///
/// # Errors
/// Returns the first binding failure; behaviors after it are left unbound.
pub fn start_with(config: StorefrontConfig) -> Result<(), StorefrontError> {
    config.validate()?;
    let document = dom::document()?;
    init(&document, Rc::new(config), Rc::new(LocationNavigator))
}

/// Bind all behaviors to `document`, taking its load phase from `readyState`.
///
/// # Errors
/// Returns the first binding failure.
pub fn init(
    document: &Document,
    config: Rc<StorefrontConfig>,
    navigator: Rc<dyn PageNavigator>,
) -> Result<(), StorefrontError> {
    init_in_phase(document, config, navigator, LoadPhase::of(document))
}

/// Bind all behaviors to `document`.
///
/// The navigation toggle, the quantity stepper and the product table bind
/// immediately. The purchase guard binds on `DOMContentLoaded` while the
/// document is [`LoadPhase::Loading`], otherwise right away.
///
/// # Errors
/// Returns the first binding failure.
pub fn init_in_phase(
    document: &Document,
    config: Rc<StorefrontConfig>,
    navigator: Rc<dyn PageNavigator>,
    phase: LoadPhase,
) -> Result<(), StorefrontError> {
    nav::bind(document, &config)?;
    stepper::bind(document, &config)?;
    price_table::bind(document, &config)?;

    match phase {
        LoadPhase::Parsed => purchase_guard::bind(document, &config, navigator),
        LoadPhase::Loading => {
            let doc = document.clone();
            let mut pending = Some((config, navigator));
            dom::add_listener(document, "DOMContentLoaded", move |_| {
                let Some((config, navigator)) = pending.take() else {
                    return;
                };
                if let Err(err) = purchase_guard::bind(&doc, &config, navigator) {
                    report(&err);
                }
            })
        }
    }
}

/// Log a startup failure to the browser console.
pub fn report(err: &StorefrontError) {
    log::error!("storefront startup failed: {err}");
    dom::console_error(&format!("storefront startup failed: {err}"));
}
