use crate::policy::ClickLocation;

/// Open/closed state shared by the menu control and the navigation
/// surface. Both elements are rendered from this single flag.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    active: bool,
}

impl MenuState {
    pub fn new() -> Self {
        Self { active: false }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Flip the state, returning the new value.
    pub fn toggle(&mut self) -> bool {
        self.active = !self.active;
        self.active
    }

    /// Force the menu closed. Returns true if it was open.
    pub fn dismiss(&mut self) -> bool {
        let changed = self.active;
        self.active = false;
        changed
    }

    /// Apply a document-level click. Only a click outside both the
    /// control and the navigation surface closes an open menu.
    pub fn handle_click(&mut self, location: ClickLocation) -> bool {
        if location.is_outside() && self.active {
            self.dismiss()
        } else {
            false
        }
    }
}
