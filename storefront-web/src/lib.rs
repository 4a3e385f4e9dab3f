#![forbid(unsafe_code)]
//! Storefront page script compiled to WebAssembly.
//!
//! Binds the behaviors from `storefront-core` to server-rendered markup.
use wasm_bindgen::prelude::*;

pub mod app;
pub mod dom;
pub mod nav;
pub mod price_table;
pub mod purchase_guard;
pub mod stepper;

use storefront_core::{StorefrontConfig, StorefrontError};

#[cfg(all(target_arch = "wasm32", feature = "autostart"))]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    init_storefront()
}

/// Bind the page using the bundled configuration.
///
/// # Errors
/// Throws to the JS host when a required element is missing.
#[wasm_bindgen(js_name = initStorefront)]
pub fn init_storefront() -> Result<(), JsValue> {
    launch(StorefrontConfig::load_from_static())
}

/// Bind the page using a JSON configuration supplied by the host page.
///
/// # Errors
/// Throws to the JS host when the configuration is invalid or a required
/// element is missing.
#[wasm_bindgen(js_name = initStorefrontWithConfig)]
pub fn init_storefront_with_config(config_json: &str) -> Result<(), JsValue> {
    match StorefrontConfig::from_json(config_json) {
        Ok(config) => launch(config),
        Err(err) => Err(fail(&err)),
    }
}

fn launch(config: StorefrontConfig) -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    app::start_with(config).map_err(|err| fail(&err))
}

fn fail(err: &StorefrontError) -> JsValue {
    app::report(err);
    JsValue::from_str(&err.to_string())
}
