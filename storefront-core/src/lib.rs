//! Storefront page behavior
//!
//! Platform-agnostic rules behind the storefront page script: number coercion,
//! the navigation toggle, the quantity stepper, row pricing and the
//! purchase-intent guard. The browser bindings live in `storefront-web`.

pub mod config;
pub mod error;
pub mod nav;
pub mod numbers;
pub mod page;
pub mod pricing;
pub mod purchase;
pub mod stepper;

// Re-export commonly used types
pub use config::{Selectors, StorefrontConfig};
pub use error::StorefrontError;
pub use nav::NavState;
pub use numbers::{format_number, parse_int, to_number};
pub use page::{PageRow, QuantityField, StorefrontPage};
pub use pricing::{MIN_ROW_CELLS, PRICE_CELL, QUANTITY_CELL, RowPricing, TOTAL_CELL};
pub use purchase::{
    ModalClickTarget, ModalEvent, ModalState, NavigationRequest, PurchaseDecision, decide_purchase,
};
pub use stepper::{StepDirection, StepOutcome, StepperPolicy, step_quantity};
