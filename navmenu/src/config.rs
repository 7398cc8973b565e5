use serde::Deserialize;

use crate::error::{NavMenuError, NavMenuResult};

pub const DEFAULT_MOBILE_BREAKPOINT: u32 = 768;

/// Selectors, class names and thresholds used to wire the menu.
///
/// Every field has a default, so a partial JSON object such as
/// `{"nav_selector": "#site-nav"}` is accepted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub control_selector: String,
    pub nav_selector: String,
    pub active_class: String,
    pub control_class: String,
    pub affordance_class: String,
    pub synthesize_control: bool,
    pub mobile_breakpoint: u32,
    pub root_path: String,
    pub root_body_class: Option<String>,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            control_selector: ".menu-button".to_string(),
            nav_selector: "nav".to_string(),
            active_class: "active".to_string(),
            control_class: "menu-button".to_string(),
            affordance_class: "hamburger".to_string(),
            synthesize_control: true,
            mobile_breakpoint: DEFAULT_MOBILE_BREAKPOINT,
            root_path: "/".to_string(),
            root_body_class: Some("index-page".to_string()),
        }
    }
}

impl MenuConfig {
    pub fn from_json(json: &str) -> NavMenuResult<Self> {
        let config: MenuConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> NavMenuResult<()> {
        require_non_empty("control_selector", &self.control_selector)?;
        require_non_empty("nav_selector", &self.nav_selector)?;
        require_class_name("active_class", &self.active_class)?;
        require_class_name("control_class", &self.control_class)?;
        require_class_name("affordance_class", &self.affordance_class)?;
        if let Some(class) = &self.root_body_class {
            require_class_name("root_body_class", class)?;
        }
        if !self.root_path.starts_with('/') {
            return Err(NavMenuError::Config(format!(
                "root_path must start with '/', got '{}'",
                self.root_path
            )));
        }
        Ok(())
    }

    /// Selector matching the decorative element inside a control.
    pub fn affordance_selector(&self) -> String {
        format!(".{}", self.affordance_class)
    }
}

fn require_non_empty(field: &str, value: &str) -> NavMenuResult<()> {
    if value.trim().is_empty() {
        return Err(NavMenuError::Config(format!("{} is empty", field)));
    }
    Ok(())
}

fn require_class_name(field: &str, value: &str) -> NavMenuResult<()> {
    require_non_empty(field, value)?;
    if value.chars().any(char::is_whitespace) {
        return Err(NavMenuError::Config(format!(
            "{} must be a single class name, got '{}'",
            field, value
        )));
    }
    Ok(())
}
