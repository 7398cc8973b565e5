use std::fmt;

use navmenu::NavMenuError;
use wasm_bindgen::JsValue;

pub type MenuResult<T> = Result<T, MenuError>;

#[derive(Debug)]
pub enum MenuError {
    JsError(JsValue),
    NoWindow,
    NoDocument,
    NoBody,
    Config(NavMenuError),
}

impl From<JsValue> for MenuError {
    fn from(e: JsValue) -> Self {
        MenuError::JsError(e)
    }
}

impl From<NavMenuError> for MenuError {
    fn from(e: NavMenuError) -> Self {
        MenuError::Config(e)
    }
}

impl From<MenuError> for JsValue {
    fn from(e: MenuError) -> Self {
        match e {
            MenuError::JsError(value) => value,
            other => js_sys::Error::new(&other.to_string()).into(),
        }
    }
}

impl fmt::Display for MenuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuError::JsError(e) => {
                write!(f, "JavaScript error: {:?}", e)
            }
            MenuError::NoWindow => write!(f, "No window found"),
            MenuError::NoDocument => write!(f, "No document found"),
            MenuError::NoBody => write!(f, "Document has no body"),
            MenuError::Config(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for MenuError {}
