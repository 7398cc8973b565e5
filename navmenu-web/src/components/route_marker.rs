use navmenu::{is_root_path, MenuConfig};
use web_sys::HtmlElement;

use crate::base::page::PageContext;
use crate::error::MenuResult;

/// Flag the body with `root_body_class` when the page is the site root.
/// Returns whether the marker was applied.
pub fn mark_route(
    body: &HtmlElement,
    context: &PageContext,
    config: &MenuConfig,
) -> MenuResult<bool> {
    let class = match &config.root_body_class {
        Some(class) => class,
        None => return Ok(false),
    };
    if !is_root_path(context.path(), &config.root_path) {
        return Ok(false);
    }
    body.class_list().add_1(class)?;
    Ok(true)
}
