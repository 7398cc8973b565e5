use navmenu::{Affordance, MenuConfig};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::error::MenuResult;

/// Build a menu control with a single decorative bar and append it to
/// `body`.
pub fn synthesize(
    document: &Document,
    body: &HtmlElement,
    config: &MenuConfig,
) -> MenuResult<Element> {
    let control = document.create_element("div")?;
    control.set_class_name(&config.control_class);

    let bar = document.create_element("span")?;
    bar.set_class_name(&config.affordance_class);
    control.append_child(&bar)?;

    body.append_child(&control)?;
    log::debug!("Synthesized menu control '.{}'", config.control_class);
    Ok(control)
}

pub fn find_affordance(
    control: &Element,
    config: &MenuConfig,
) -> MenuResult<Option<HtmlElement>> {
    let element = control.query_selector(&config.affordance_selector())?;
    Ok(element.and_then(|element| element.dyn_into::<HtmlElement>().ok()))
}

pub fn apply_affordance(
    element: &HtmlElement,
    affordance: Affordance,
) -> MenuResult<()> {
    let style = element.style();
    for (property, value) in affordance.declarations() {
        match value {
            Some(value) => style.set_property(property, value)?,
            None => {
                style.remove_property(property)?;
            }
        }
    }
    Ok(())
}
