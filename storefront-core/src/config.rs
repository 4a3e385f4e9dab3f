//! Page contract: which elements the script binds to and how it presents state.
use crate::error::StorefrontError;
use crate::stepper::StepperPolicy;
use serde::{Deserialize, Serialize};

const DEFAULT_STOREFRONT_CONFIG: &str =
    include_str!("../../storefront-web/static/assets/data/storefront.json");

/// CSS selectors for every element the page script touches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub menu_trigger: String,
    pub nav_list: String,
    pub decrement: String,
    pub increment: String,
    pub quantity_input: String,
    pub table_body: String,
    pub product_card: String,
    pub buy_button: String,
    pub modal: String,
    pub close_button: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            menu_trigger: "#menuBtn".to_string(),
            nav_list: ".nav_list".to_string(),
            decrement: "#minusBtn".to_string(),
            increment: "#plusBtn".to_string(),
            quantity_input: ".quantity_form input".to_string(),
            table_body: ".tBody".to_string(),
            product_card: ".product_card".to_string(),
            buy_button: ".buy_button".to_string(),
            modal: "#errorModal".to_string(),
            close_button: ".close-btn".to_string(),
        }
    }
}

impl Selectors {
    fn entries(&self) -> [(&'static str, &str); 10] {
        [
            ("menu_trigger", &self.menu_trigger),
            ("nav_list", &self.nav_list),
            ("decrement", &self.decrement),
            ("increment", &self.increment),
            ("quantity_input", &self.quantity_input),
            ("table_body", &self.table_body),
            ("product_card", &self.product_card),
            ("buy_button", &self.buy_button),
            ("modal", &self.modal),
            ("close_button", &self.close_button),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    pub selectors: Selectors,
    /// Class toggled on the menu trigger and navigation list.
    pub active_class: String,
    /// Destination of a buy click when products are on the page.
    pub cart_path: String,
    pub modal_visible_display: String,
    pub modal_hidden_display: String,
    pub stepper: StepperPolicy,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            active_class: "active".to_string(),
            cart_path: "/cart".to_string(),
            modal_visible_display: "flex".to_string(),
            modal_hidden_display: "none".to_string(),
            stepper: StepperPolicy::default(),
        }
    }
}

impl StorefrontConfig {
    /// Load the configuration shipped with the page assets.
    #[must_use]
    pub fn load_from_static() -> Self {
        Self::from_json(DEFAULT_STOREFRONT_CONFIG).unwrap_or_else(|err| {
            log::warn!("falling back to default storefront config: {err}");
            Self::default()
        })
    }

    /// Parse and validate a configuration document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or fails [`Self::validate`].
    pub fn from_json(json: &str) -> Result<Self, StorefrontError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants the page bindings rely on.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::InvalidConfig`] for an empty selector, an active
    /// class that is not a single token, an empty visible modal display or one
    /// equal to the hidden display, or a cart path that is not site-absolute.
    pub fn validate(&self) -> Result<(), StorefrontError> {
        if let Some((name, _)) = self
            .selectors
            .entries()
            .into_iter()
            .find(|(_, selector)| selector.trim().is_empty())
        {
            return Err(StorefrontError::InvalidConfig(format!(
                "selector `{name}` is empty"
            )));
        }
        if self.active_class.is_empty() || self.active_class.contains(char::is_whitespace) {
            return Err(StorefrontError::InvalidConfig(format!(
                "active_class `{}` must be a single class token",
                self.active_class
            )));
        }
        if self.modal_visible_display.trim().is_empty() {
            return Err(StorefrontError::InvalidConfig(
                "modal_visible_display is empty".to_string(),
            ));
        }
        if self.modal_visible_display == self.modal_hidden_display {
            return Err(StorefrontError::InvalidConfig(format!(
                "modal visible and hidden displays are both `{}`",
                self.modal_visible_display
            )));
        }
        if !self.cart_path.starts_with('/') {
            return Err(StorefrontError::InvalidConfig(format!(
                "cart_path `{}` must start with '/'",
                self.cart_path
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_config_matches_defaults() {
        assert_eq!(StorefrontConfig::load_from_static(), StorefrontConfig::default());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config = StorefrontConfig::from_json(
            r#"{ "cart_path": "/checkout", "stepper": { "min_quantity": 1 } }"#,
        )
        .expect("valid config");
        assert_eq!(config.cart_path, "/checkout");
        assert_eq!(config.stepper.min_quantity, Some(1));
        assert!(!config.stepper.reject_non_numeric);
        assert_eq!(config.selectors.modal, "#errorModal");
    }

    #[test]
    fn rejects_empty_selector() {
        let err = StorefrontConfig::from_json(r#"{ "selectors": { "modal": " " } }"#)
            .expect_err("empty selector");
        assert!(err.to_string().contains("modal"));
    }

    #[test]
    fn rejects_relative_cart_path() {
        let err = StorefrontConfig::from_json(r#"{ "cart_path": "cart" }"#)
            .expect_err("relative path");
        assert!(matches!(err, StorefrontError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_active_class_with_whitespace() {
        for class in ["is active", " active", ""] {
            let json = format!(r#"{{ "active_class": "{class}" }}"#);
            let err = StorefrontConfig::from_json(&json).expect_err("not a class token");
            assert!(err.to_string().contains("active_class"), "{class:?}: {err}");
        }
    }

    #[test]
    fn rejects_empty_visible_modal_display() {
        let err = StorefrontConfig::from_json(r#"{ "modal_visible_display": "" }"#)
            .expect_err("empty display");
        assert!(err.to_string().contains("modal_visible_display"));
    }

    #[test]
    fn rejects_identical_modal_displays() {
        let err = StorefrontConfig::from_json(
            r#"{ "modal_visible_display": "block", "modal_hidden_display": "block" }"#,
        )
        .expect_err("indistinguishable states");
        assert!(matches!(err, StorefrontError::InvalidConfig(_)));
    }

    #[test]
    fn custom_modal_displays_are_accepted() {
        let config = StorefrontConfig::from_json(
            r#"{ "modal_visible_display": "block", "modal_hidden_display": "none" }"#,
        )
        .expect("valid config");
        assert_eq!(config.modal_visible_display, "block");
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = StorefrontConfig::from_json("{").expect_err("bad json");
        assert!(matches!(err, StorefrontError::Config(_)));
    }
}
