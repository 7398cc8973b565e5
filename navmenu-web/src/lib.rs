pub(crate) mod base;
pub(crate) mod components;
pub(crate) mod error;
pub(crate) mod helpers;

use std::cell::RefCell;

pub use base::page::PageContext;
pub use components::{mark_route, MenuToggleController};
pub use error::{MenuError, MenuResult};
pub use navmenu::MenuConfig;
use gloo_events::EventListener;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event};

thread_local! {
    static INSTALLED: RefCell<Option<MenuToggleController>> =
        const { RefCell::new(None) };
}

#[cfg_attr(not(test), wasm_bindgen(start))]
pub fn start() -> Result<(), JsValue> {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
    let document = helpers::dom::document()?;
    let ready_state = document.ready_state();
    run_when_ready(&document, &ready_state, MenuConfig::default())?;
    Ok(())
}

/// Replace the current menu wiring with one built from a JSON encoded
/// `MenuConfig`. Missing fields take their defaults.
#[wasm_bindgen]
pub fn install_with_config(config_json: &str) -> Result<(), JsValue> {
    let config = MenuConfig::from_json(config_json).map_err(MenuError::from)?;
    install(&config)?;
    Ok(())
}

/// Remove the current menu wiring, if any.
#[wasm_bindgen]
pub fn uninstall() {
    if let Some(controller) = INSTALLED.with(|slot| slot.borrow_mut().take()) {
        controller.teardown();
        log::debug!("Menu uninstalled");
    }
}

/// Mark the route and wire the menu in the current document. Returns
/// whether a menu was installed.
pub fn install(config: &MenuConfig) -> MenuResult<bool> {
    let window = helpers::dom::window()?;
    let document = window.document().ok_or(MenuError::NoDocument)?;
    let context = PageContext::from_window(&window)?;
    install_in(&document, &context, config)
}

fn install_in(
    document: &Document,
    context: &PageContext,
    config: &MenuConfig,
) -> MenuResult<bool> {
    uninstall();
    // the route marker does not depend on a menu being present
    mark_route(&helpers::dom::body(document)?, context, config)?;
    let controller = MenuToggleController::install(document, context, config)?;
    let installed = controller.is_some();
    INSTALLED.with(|slot| *slot.borrow_mut() = controller);
    Ok(installed)
}

/// Install now if the document has been parsed, otherwise once
/// `DOMContentLoaded` fires.
fn run_when_ready(
    document: &Document,
    ready_state: &str,
    config: MenuConfig,
) -> MenuResult<()> {
    if ready_state != "loading" {
        install(&config)?;
        return Ok(());
    }
    EventListener::once(document, "DOMContentLoaded", move |_: &Event| {
        if let Err(e) = install(&config) {
            log::error!("Failed to install menu: {}", e);
        }
    })
    .forget();
    Ok(())
}
