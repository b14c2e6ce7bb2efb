//! Portfolio filter buttons.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use super::{current_element, listen, select_all};
use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::state::filter::{CategoryFilter, FADE_END, Visibility};

const FILTER_ATTR: &str = "data-filter";
const CATEGORY_ATTR: &str = "data-category";

struct FilterView {
    buttons: Vec<Element>,
    items: Vec<Element>,
    active_class: String,
    fade_delay_ms: u32,
    filter: RefCell<CategoryFilter>,
}

impl FilterView {
    fn select(&self, button: &Element) -> Result<(), SiteError> {
        let Some(raw) = button.get_attribute(FILTER_ATTR) else {
            log::debug!("filter button without {FILTER_ATTR} ignored");
            return Ok(());
        };

        for other in &self.buttons {
            other.class_list().remove_1(&self.active_class)?;
        }
        button.class_list().add_1(&self.active_class)?;

        let mut filter = self.filter.borrow_mut();
        filter.select(&raw);
        for item in &self.items {
            let Some(html) = item.dyn_ref::<HtmlElement>() else {
                continue;
            };
            let visibility = filter.visibility(item.get_attribute(CATEGORY_ATTR).as_deref());
            set_styles(html, visibility.immediate_styles())?;
            if visibility == Visibility::Shown {
                let html = html.clone();
                Timeout::new(self.fade_delay_ms, move || {
                    if let Err(err) = set_styles(&html, FADE_END) {
                        log::warn!("fade-in failed: {err}");
                    }
                })
                .forget();
            }
        }
        log::debug!("filter selected: {:?}", filter.selected());
        Ok(())
    }
}

fn set_styles(element: &HtmlElement, styles: &[(&str, &str)]) -> Result<(), SiteError> {
    let style = element.style();
    for (property, value) in styles {
        style.set_property(property, value)?;
    }
    Ok(())
}

/// Bind every filter button. Pages without filter buttons are skipped.
pub fn install(document: &Document, config: &SiteConfig) -> Result<(), SiteError> {
    let buttons = select_all(document, &config.filter_button_selector)?;
    if buttons.is_empty() {
        log::debug!("no filter buttons on this page");
        return Ok(());
    }
    let items = select_all(document, &config.filter_item_selector)?;

    let view = Rc::new(FilterView {
        buttons,
        items,
        active_class: config.filter_active_class.clone(),
        fade_delay_ms: u32::try_from(config.fade_delay().as_millis()).unwrap_or(u32::MAX),
        filter: RefCell::new(CategoryFilter::new(config.filter_all.clone())),
    });

    let on_click = Rc::clone(&view);
    listen(&view.buttons, "click", move |event| {
        let Some(button) = current_element::<Element>(&event) else {
            return;
        };
        if let Err(err) = on_click.select(&button) {
            log::warn!("filter update failed: {err}");
        }
    })?;
    log::debug!("{} filter buttons over {} items", view.buttons.len(), view.items.len());
    Ok(())
}
