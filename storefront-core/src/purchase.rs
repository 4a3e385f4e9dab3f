//! Purchase-intent guard and the blocking modal it controls.
use crate::config::StorefrontConfig;

/// Full-page navigation requested by the guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    pub path: String,
}

/// What a buy click resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurchaseDecision {
    ShowModal,
    Navigate(NavigationRequest),
}

/// Decide a buy click from a freshly evaluated product-existence signal.
#[must_use]
pub fn decide_purchase(product_present: bool, config: &StorefrontConfig) -> PurchaseDecision {
    if product_present {
        PurchaseDecision::Navigate(NavigationRequest {
            path: config.cart_path.clone(),
        })
    } else {
        PurchaseDecision::ShowModal
    }
}

/// Where a click that reached the window-level listener landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalClickTarget {
    /// The modal container itself, i.e. the overlay around the content.
    Backdrop,
    /// Anything else, including the modal's inner content.
    Elsewhere,
}

/// Inputs to the modal state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalEvent {
    BuyWithoutProducts,
    CloseClicked,
    Clicked(ModalClickTarget),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Hidden,
    Visible,
}

impl ModalState {
    #[must_use]
    pub const fn is_visible(self) -> bool {
        matches!(self, Self::Visible)
    }

    #[must_use]
    pub const fn apply(self, event: ModalEvent) -> Self {
        match event {
            ModalEvent::BuyWithoutProducts => Self::Visible,
            ModalEvent::CloseClicked | ModalEvent::Clicked(ModalClickTarget::Backdrop) => {
                Self::Hidden
            }
            ModalEvent::Clicked(ModalClickTarget::Elsewhere) => self,
        }
    }

    /// CSS `display` value for this state.
    #[must_use]
    pub fn display_value(self, config: &StorefrontConfig) -> &str {
        match self {
            Self::Visible => &config.modal_visible_display,
            Self::Hidden => &config.modal_hidden_display,
        }
    }
}
