//! In-memory model of the storefront page.
//!
//! Applies the same rules as the DOM bindings to plain state so interaction
//! sequences can be replayed and checked without a browser.
use crate::config::StorefrontConfig;
use crate::nav::NavState;
use crate::pricing::RowPricing;
use crate::purchase::{
    ModalClickTarget, ModalEvent, ModalState, NavigationRequest, PurchaseDecision, decide_purchase,
};
use crate::stepper::{StepDirection, StepOutcome, step_quantity};

/// One row of the product table.
#[derive(Debug, Clone, PartialEq)]
pub struct PageRow {
    pricing: RowPricing,
    /// Text shown in the price cell; never re-read after setup.
    pub price_text: String,
    pub quantity_text: String,
    pub total_text: String,
}

impl PageRow {
    #[must_use]
    pub fn new(price_text: &str, quantity_text: &str) -> Self {
        Self {
            pricing: RowPricing::from_price_text(price_text),
            price_text: price_text.to_string(),
            quantity_text: quantity_text.to_string(),
            total_text: String::new(),
        }
    }

    #[must_use]
    pub const fn pricing(&self) -> RowPricing {
        self.pricing
    }
}

/// The single product form's quantity input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuantityField {
    pub value: String,
    pub text: String,
}

#[derive(Debug, Clone, Default)]
pub struct StorefrontPage {
    config: StorefrontConfig,
    nav: NavState,
    quantity: QuantityField,
    rows: Vec<PageRow>,
    product_cards: usize,
    modal: ModalState,
    navigations: Vec<NavigationRequest>,
}

impl StorefrontPage {
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_quantity(mut self, value: &str) -> Self {
        self.set_quantity(value);
        self
    }

    #[must_use]
    pub fn with_row(mut self, price_text: &str, quantity_text: &str) -> Self {
        self.rows.push(PageRow::new(price_text, quantity_text));
        self
    }

    #[must_use]
    pub fn with_product_cards(mut self, count: usize) -> Self {
        self.product_cards = count;
        self
    }

    #[must_use]
    pub const fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    #[must_use]
    pub const fn nav_active(&self) -> bool {
        self.nav.is_active()
    }

    #[must_use]
    pub const fn quantity(&self) -> &QuantityField {
        &self.quantity
    }

    #[must_use]
    pub fn row(&self, index: usize) -> Option<&PageRow> {
        self.rows.get(index)
    }

    #[must_use]
    pub const fn modal(&self) -> ModalState {
        self.modal
    }

    /// Navigations requested so far, oldest first.
    #[must_use]
    pub fn navigations(&self) -> &[NavigationRequest] {
        &self.navigations
    }

    pub fn click_menu(&mut self) -> bool {
        self.nav.toggle()
    }

    /// Simulate the user typing into the quantity input.
    pub fn set_quantity(&mut self, value: &str) {
        self.quantity.value = value.to_string();
    }

    pub fn click_decrement(&mut self) {
        self.step(StepDirection::Decrement);
    }

    pub fn click_increment(&mut self) {
        self.step(StepDirection::Increment);
    }

    fn step(&mut self, direction: StepDirection) {
        if let StepOutcome::Updated { text, .. } =
            step_quantity(&self.quantity.value, direction, &self.config.stepper)
        {
            self.quantity.text.clone_from(&text);
            self.quantity.value = text;
        }
    }

    /// Simulate typing into a row's quantity input. Returns `false` for an unknown row.
    pub fn set_row_quantity(&mut self, index: usize, value: &str) -> bool {
        self.rows.get_mut(index).is_some_and(|row| {
            row.quantity_text = value.to_string();
            true
        })
    }

    /// Overwrite a row's displayed price without touching its captured unit price.
    pub fn set_row_price_text(&mut self, index: usize, value: &str) -> bool {
        self.rows.get_mut(index).is_some_and(|row| {
            row.price_text = value.to_string();
            true
        })
    }

    /// Click a stepper button in a row and return the new total text.
    pub fn click_row_stepper(&mut self, index: usize) -> Option<&str> {
        let row = self.rows.get_mut(index)?;
        row.total_text = row.pricing.line_total_text(&row.quantity_text);
        Some(row.total_text.as_str())
    }

    pub const fn add_product_card(&mut self) {
        self.product_cards += 1;
    }

    pub const fn remove_product_cards(&mut self) {
        self.product_cards = 0;
    }

    /// Click a buy control; returns the navigation it triggers, if any.
    pub fn click_buy(&mut self) -> Option<NavigationRequest> {
        match decide_purchase(self.product_cards > 0, &self.config) {
            PurchaseDecision::ShowModal => {
                self.modal = self.modal.apply(ModalEvent::BuyWithoutProducts);
                None
            }
            PurchaseDecision::Navigate(request) => {
                self.navigations.push(request.clone());
                Some(request)
            }
        }
    }

    pub fn click_close(&mut self) {
        self.modal = self.modal.apply(ModalEvent::CloseClicked);
    }

    pub fn click_modal(&mut self, target: ModalClickTarget) {
        self.modal = self.modal.apply(ModalEvent::Clicked(target));
    }
}
