use web_sys::Window;

use crate::error::MenuResult;

/// Page inputs read once when the menu is installed.
#[derive(Debug, Clone, PartialEq)]
pub struct PageContext {
    path: String,
    viewport_width: f64,
}

impl PageContext {
    pub fn new(path: &str, viewport_width: f64) -> Self {
        Self {
            path: path.to_string(),
            viewport_width,
        }
    }

    pub fn from_window(window: &Window) -> MenuResult<Self> {
        let path = window.location().pathname()?;
        // innerWidth is a number in every browser we target; treat
        // anything else as unknown so no control gets synthesized
        let viewport_width =
            window.inner_width()?.as_f64().unwrap_or(f64::NAN);
        Ok(Self {
            path,
            viewport_width,
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_from_window() {
        let window = web_sys::window().unwrap();
        let context = PageContext::from_window(&window).unwrap();
        assert!(context.path().starts_with('/'));
        assert!(context.viewport_width() >= 0.0);
    }

    #[wasm_bindgen_test]
    fn test_new() {
        let context = PageContext::new("/about", 640.0);
        assert_eq!(context.path(), "/about");
        assert_eq!(context.viewport_width(), 640.0);
    }
}
