use crate::state::MenuState;

const OPEN_DECLARATIONS: [(&str, Option<&str>); 2] = [
    ("background-color", Some("transparent")),
    ("transform", Some("rotate(45deg)")),
];

const DEFAULT_DECLARATIONS: [(&str, Option<&str>); 2] =
    [("background-color", None), ("transform", None)];

/// Visual state of the decorative element inside the menu control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Affordance {
    Default,
    Open,
}

impl Affordance {
    /// Property/value pairs to apply. `None` removes the inline property
    /// so the stylesheet value is restored.
    pub fn declarations(
        &self,
    ) -> &'static [(&'static str, Option<&'static str>)] {
        match self {
            Affordance::Default => &DEFAULT_DECLARATIONS,
            Affordance::Open => &OPEN_DECLARATIONS,
        }
    }
}

impl From<MenuState> for Affordance {
    fn from(state: MenuState) -> Self {
        if state.is_active() {
            Affordance::Open
        } else {
            Affordance::Default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STYLED_PROPERTIES: [&str; 2] = ["background-color", "transform"];

    #[test]
    fn test_affordance_follows_state() {
        let mut state = MenuState::new();
        assert_eq!(Affordance::from(state), Affordance::Default);
        state.toggle();
        assert_eq!(Affordance::from(state), Affordance::Open);
    }

    #[test]
    fn test_open_rotates_and_hides() {
        let declarations = Affordance::Open.declarations();
        assert!(declarations
            .contains(&("transform", Some("rotate(45deg)"))));
        assert!(declarations
            .contains(&("background-color", Some("transparent"))));
    }

    #[test]
    fn test_default_removes_every_styled_property() {
        let declarations = Affordance::Default.declarations();
        for property in STYLED_PROPERTIES {
            assert!(declarations.contains(&(property, None)));
        }
        assert_eq!(
            Affordance::Open.declarations().len(),
            STYLED_PROPERTIES.len()
        );
    }
}
