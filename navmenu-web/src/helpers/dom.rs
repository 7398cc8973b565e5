use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, HtmlElement, Node, Window};

use crate::error::{MenuError, MenuResult};

pub fn window() -> MenuResult<Window> {
    web_sys::window().ok_or(MenuError::NoWindow)
}

pub fn document() -> MenuResult<Document> {
    window()?.document().ok_or(MenuError::NoDocument)
}

pub fn body(document: &Document) -> MenuResult<HtmlElement> {
    document.body().ok_or(MenuError::NoBody)
}

/// First element matching `selector`. An invalid selector is an error,
/// a selector without a match is not.
pub fn query(
    document: &Document,
    selector: &str,
) -> MenuResult<Option<Element>> {
    Ok(document.query_selector(selector)?)
}

/// Whether `target` is `element` or one of its descendants. Targets that
/// are not DOM nodes are never contained.
pub fn contains(element: &Element, target: Option<&EventTarget>) -> bool {
    target
        .and_then(|target| target.dyn_ref::<Node>())
        .map(|node| element.contains(Some(node)))
        .unwrap_or(false)
}
