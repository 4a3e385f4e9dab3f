//! Quantity stepper arithmetic.
use crate::numbers::{format_number, i64_to_f64, parse_int};
use serde::{Deserialize, Serialize};

/// Which stepper control was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Decrement,
    Increment,
}

impl StepDirection {
    #[must_use]
    pub const fn delta(self) -> f64 {
        match self {
            Self::Decrement => -1.0,
            Self::Increment => 1.0,
        }
    }
}

/// Optional guard rails for the stepper.
///
/// The defaults apply no floor and write `NaN` through when the field does not
/// hold a number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepperPolicy {
    /// Results below this floor are raised to it.
    pub min_quantity: Option<i64>,
    /// Leave the field untouched when its value does not parse.
    pub reject_non_numeric: bool,
}

/// Result of one stepper click.
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    /// Write `text` into both the input value and its text content.
    Updated { value: f64, text: String },
    Unchanged,
}

impl StepOutcome {
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Updated { text, .. } => Some(text),
            Self::Unchanged => None,
        }
    }
}

/// Compute the next quantity from the field's current text.
#[must_use]
pub fn step_quantity(current: &str, direction: StepDirection, policy: &StepperPolicy) -> StepOutcome {
    let parsed = parse_int(current);
    if parsed.is_nan() && policy.reject_non_numeric {
        return StepOutcome::Unchanged;
    }

    let mut value = parsed + direction.delta();
    if let Some(floor) = policy.min_quantity.map(i64_to_f64)
        && value < floor
    {
        value = floor;
    }

    StepOutcome::Updated {
        value,
        text: format_number(value),
    }
}
