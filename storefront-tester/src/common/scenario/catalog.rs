use super::Scenario;
use super::guard::{GuardEmpty, GuardProducts, ModalDismissal};
use super::nav::NavToggle;
use super::pricing::RowPricingScenario;
use super::smoke::Smoke;
use super::stepper::QuantityStepper;

/// Individual interaction scenarios, in the order `all` and `smoke` run them.
pub const CORE_SCENARIOS: [&str; 6] = [
    "nav-toggle",
    "quantity-stepper",
    "row-pricing",
    "guard-empty",
    "modal-dismissal",
    "guard-products",
];

pub fn get_scenario(name: &str) -> Option<Box<dyn Scenario>> {
    let scenario: Box<dyn Scenario> = match name {
        "nav-toggle" => Box::new(NavToggle),
        "quantity-stepper" => Box::new(QuantityStepper),
        "row-pricing" => Box::new(RowPricingScenario),
        "guard-empty" => Box::new(GuardEmpty),
        "guard-products" => Box::new(GuardProducts),
        "modal-dismissal" => Box::new(ModalDismissal),
        "smoke" => Box::new(Smoke),
        _ => return None,
    };
    Some(scenario)
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    CORE_SCENARIOS
        .iter()
        .chain(std::iter::once(&"smoke"))
        .filter_map(|key| get_scenario(key))
        .map(|scenario| (scenario.key(), scenario.description()))
        .collect()
}
