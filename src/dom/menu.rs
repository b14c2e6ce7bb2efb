//! Mobile menu button and panel.

use std::rc::Rc;

use web_sys::{Document, Element};

use super::{collect_elements, listen};
use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::state::menu::{MenuState, MenuToggle};

struct MenuView {
    button: Element,
    panel: Element,
    active_class: String,
}

impl MenuView {
    /// The panel's class list is the source of truth for open/closed.
    fn state(&self) -> MenuState {
        MenuState::from_active(self.panel.class_list().contains(&self.active_class))
    }

    fn render(&self, state: MenuState) -> Result<(), SiteError> {
        self.panel
            .class_list()
            .toggle_with_force(&self.active_class, state.is_open())?;
        self.button.set_text_content(Some(state.button_label()));
        self.button.set_attribute("aria-expanded", state.aria_expanded())?;
        Ok(())
    }

    fn update(&self, step: impl FnOnce(&mut MenuToggle) -> MenuState) {
        let mut menu = MenuToggle::new(self.state());
        let next = step(&mut menu);
        if let Err(err) = self.render(next) {
            log::warn!("menu update failed: {err}");
        }
    }
}

/// Bind the menu button and close the panel when one of its links is used.
/// Pages without both elements are skipped.
pub fn install(document: &Document, config: &SiteConfig) -> Result<(), SiteError> {
    let button = document.query_selector(&config.menu_button_selector)?;
    let panel = document.query_selector(&config.menu_selector)?;
    let (Some(button), Some(panel)) = (button, panel) else {
        log::debug!("no mobile menu on this page");
        return Ok(());
    };

    let links = collect_elements(&panel.query_selector_all("a")?);
    let view = Rc::new(MenuView { button, panel, active_class: config.menu_active_class.clone() });

    let on_button = Rc::clone(&view);
    listen(std::slice::from_ref(&view.button), "click", move |_event| {
        on_button.update(MenuToggle::toggle);
    })?;

    let on_link = Rc::clone(&view);
    listen(&links, "click", move |_event| {
        on_link.update(MenuToggle::close);
    })?;
    Ok(())
}
