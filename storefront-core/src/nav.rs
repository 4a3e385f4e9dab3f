//! Navigation menu toggle.

/// Presentation state shared by the menu trigger and the navigation list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    active: bool,
}

impl NavState {
    #[must_use]
    pub const fn new(active: bool) -> Self {
        Self { active }
    }

    #[must_use]
    pub const fn is_active(self) -> bool {
        self.active
    }

    /// Invert the state and return the new value.
    pub const fn toggle(&mut self) -> bool {
        self.active = !self.active;
        self.active
    }
}
