use std::sync::atomic::{AtomicUsize, Ordering};

use navmenu::MenuConfig;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use super::dom::{body, document};

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

/// Test markup attached to the shared test page, removed on drop. Each
/// fixture gets its own ids so tests cannot see each other's elements.
pub(crate) struct Fixture {
    pub document: Document,
    pub container: Element,
    pub nav: HtmlElement,
    pub nav_link: HtmlElement,
    pub control: Option<HtmlElement>,
    pub outside: HtmlElement,
    pub config: MenuConfig,
}

impl Fixture {
    pub fn new() -> Self {
        Self::build(true, true)
    }

    pub fn without_control() -> Self {
        Self::build(false, false)
    }

    pub fn build(with_control: bool, with_affordance: bool) -> Self {
        let id = NEXT_ID.fetch_add(1, Ordering::SeqCst);
        let document = document().unwrap();
        let container = document.create_element("div").unwrap();

        let config = MenuConfig {
            control_selector: format!(".menu-button-{}", id),
            nav_selector: format!("#nav-{}", id),
            control_class: format!("menu-button-{}", id),
            ..MenuConfig::default()
        };

        let nav = create_html(&document, "nav");
        nav.set_id(&format!("nav-{}", id));
        let nav_link = create_html(&document, "a");
        nav.append_child(&nav_link).unwrap();
        container.append_child(&nav).unwrap();

        let control = with_control.then(|| {
            let control = create_html(&document, "button");
            control.set_class_name(&config.control_class);
            if with_affordance {
                let bar = create_html(&document, "span");
                bar.set_class_name(&config.affordance_class);
                control.append_child(&bar).unwrap();
            }
            container.append_child(&control).unwrap();
            control
        });

        let outside = create_html(&document, "p");
        container.append_child(&outside).unwrap();
        body(&document).unwrap().append_child(&container).unwrap();

        Self {
            document,
            container,
            nav,
            nav_link,
            control,
            outside,
            config,
        }
    }

    pub fn control(&self) -> &HtmlElement {
        self.control.as_ref().unwrap()
    }

    /// The control currently in the document, including a synthesized one.
    pub fn find_control(&self) -> Option<HtmlElement> {
        self.document
            .query_selector(&self.config.control_selector)
            .unwrap()
            .map(|element| element.unchecked_into())
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        self.container.remove();
    }
}

pub(crate) fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

fn create_html(document: &Document, tag: &str) -> HtmlElement {
    document.create_element(tag).unwrap().unchecked_into()
}
