/// Where a document click landed relative to the menu elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickLocation {
    pub inside_nav: bool,
    pub inside_control: bool,
}

impl ClickLocation {
    pub fn is_outside(&self) -> bool {
        !self.inside_nav && !self.inside_control
    }
}

/// Whether a menu control should be created for a viewport of the given
/// width. The breakpoint is inclusive.
pub fn should_synthesize_control(
    viewport_width: f64,
    breakpoint: u32,
) -> bool {
    viewport_width.is_finite()
        && viewport_width >= 0.0
        && viewport_width <= f64::from(breakpoint)
}

pub fn is_root_path(path: &str, root_path: &str) -> bool {
    path == root_path
}
