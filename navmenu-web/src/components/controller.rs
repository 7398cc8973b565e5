use std::cell::Cell;
use std::rc::Rc;

use gloo_events::EventListener;
use navmenu::{
    should_synthesize_control, Affordance, ClickLocation, MenuConfig,
    MenuState,
};
use web_sys::{Document, Element, Event, HtmlElement};

use super::control::{apply_affordance, find_affordance, synthesize};
use crate::base::page::PageContext;
use crate::error::MenuResult;
use crate::helpers::dom::{body, contains, query};

/// Elements and state shared between the controller and its event
/// handlers.
struct MenuElements {
    state: Cell<MenuState>,
    control: Element,
    nav: Element,
    affordance: Option<HtmlElement>,
    active_class: String,
}

impl MenuElements {
    fn toggle(&self) -> MenuResult<bool> {
        let mut state = self.state.get();
        let active = state.toggle();
        self.state.set(state);
        self.render()?;
        Ok(active)
    }

    fn dismiss(&self) -> MenuResult<bool> {
        let mut state = self.state.get();
        let changed = state.dismiss();
        self.state.set(state);
        if changed {
            self.render()?;
        }
        Ok(changed)
    }

    fn handle_document_click(&self, event: &Event) -> MenuResult<bool> {
        let target = event.target();
        let location = ClickLocation {
            inside_nav: contains(&self.nav, target.as_ref()),
            inside_control: contains(&self.control, target.as_ref()),
        };
        let mut state = self.state.get();
        let changed = state.handle_click(location);
        self.state.set(state);
        if changed {
            self.render()?;
        }
        Ok(changed)
    }

    /// Reflect the state onto both elements and the decorative bar.
    fn render(&self) -> MenuResult<()> {
        let state = self.state.get();
        let active = state.is_active();
        self.control
            .class_list()
            .toggle_with_force(&self.active_class, active)?;
        self.nav
            .class_list()
            .toggle_with_force(&self.active_class, active)?;
        if let Some(affordance) = &self.affordance {
            apply_affordance(affordance, Affordance::from(state))?;
        }
        Ok(())
    }
}

/// Opens and closes the navigation menu from its control, and closes it
/// on clicks anywhere outside the menu. Listeners live as long as the
/// controller; dropping it (or calling [`teardown`]) removes them.
///
/// [`teardown`]: MenuToggleController::teardown
pub struct MenuToggleController {
    elements: Rc<MenuElements>,
    synthesized: bool,
    subscriptions: Vec<EventListener>,
}

impl MenuToggleController {
    /// Wire the menu found in `document`. Returns `Ok(None)` when there is
    /// no navigation surface, or no control and none may be synthesized.
    pub fn install(
        document: &Document,
        context: &PageContext,
        config: &MenuConfig,
    ) -> MenuResult<Option<Self>> {
        let nav = match query(document, &config.nav_selector)? {
            Some(nav) => nav,
            None => {
                log::debug!(
                    "No navigation matching '{}', menu not installed",
                    config.nav_selector
                );
                return Ok(None);
            }
        };

        let (control, synthesized) =
            match query(document, &config.control_selector)? {
                Some(control) => (control, false),
                None if config.synthesize_control
                    && should_synthesize_control(
                        context.viewport_width(),
                        config.mobile_breakpoint,
                    ) =>
                {
                    (synthesize(document, &body(document)?, config)?, true)
                }
                None => {
                    log::debug!(
                        "No menu control matching '{}' at width {}, menu \
                         not installed",
                        config.control_selector,
                        context.viewport_width()
                    );
                    return Ok(None);
                }
            };

        let elements = Rc::new(MenuElements {
            state: Cell::new(MenuState::new()),
            affordance: find_affordance(&control, config)?,
            control,
            nav,
            active_class: config.active_class.clone(),
        });
        let mut controller = Self {
            elements,
            synthesized,
            subscriptions: Vec::with_capacity(2),
        };
        // from here on, an error drops the controller which also removes a
        // synthesized control again
        controller.elements.render()?;
        controller.subscribe(document);
        log::debug!("Menu installed (synthesized control: {})", synthesized);
        Ok(Some(controller))
    }

    fn subscribe(&mut self, document: &Document) {
        let elements = self.elements.clone();
        let on_toggle = EventListener::new(
            &self.elements.control,
            "click",
            move |_event: &Event| {
                if let Err(e) = elements.toggle() {
                    log::error!("Failed to toggle menu: {}", e);
                }
            },
        );
        self.subscriptions.push(on_toggle);

        let elements = self.elements.clone();
        let on_outside_click =
            EventListener::new(document, "click", move |event: &Event| {
                if let Err(e) = elements.handle_document_click(event) {
                    log::error!("Failed to close menu: {}", e);
                }
            });
        self.subscriptions.push(on_outside_click);
    }

    pub fn is_active(&self) -> bool {
        self.elements.state.get().is_active()
    }

    pub fn is_synthesized(&self) -> bool {
        self.synthesized
    }

    pub fn control(&self) -> &Element {
        &self.elements.control
    }

    pub fn nav(&self) -> &Element {
        &self.elements.nav
    }

    /// Same as clicking the control. Returns the new state.
    pub fn toggle(&self) -> MenuResult<bool> {
        self.elements.toggle()
    }

    /// Close the menu. Returns true if it was open.
    pub fn dismiss(&self) -> MenuResult<bool> {
        self.elements.dismiss()
    }

    /// Remove the listeners, close the menu and remove a synthesized
    /// control.
    pub fn teardown(self) {
        drop(self)
    }
}

impl Drop for MenuToggleController {
    fn drop(&mut self) {
        self.subscriptions.clear();
        if let Err(e) = self.elements.dismiss() {
            log::warn!("Failed to reset menu state: {}", e);
        }
        if self.synthesized {
            self.elements.control.remove();
        }
    }
}
