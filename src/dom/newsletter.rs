//! Newsletter form stub: acknowledge and reset, never submit.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlFormElement, HtmlInputElement};

use super::{current_element, listen, select_all};
use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::util::newsletter::{EMAIL_INPUT_SELECTOR, acknowledgement};

fn acknowledge(form: &HtmlFormElement) -> Result<(), SiteError> {
    let email = form
        .query_selector(EMAIL_INPUT_SELECTOR)?
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default();
    let window = web_sys::window().ok_or_else(|| SiteError::MissingElement("window".to_owned()))?;
    window.alert_with_message(&acknowledgement(&email))?;
    form.reset();
    Ok(())
}

pub fn install(document: &Document, config: &SiteConfig) -> Result<(), SiteError> {
    let forms = select_all(document, &config.newsletter_selector)?;
    if forms.is_empty() {
        return Ok(());
    }

    listen(&forms, "submit", move |event| {
        event.prevent_default();
        let Some(form) = current_element::<HtmlFormElement>(&event) else {
            return;
        };
        if let Err(err) = acknowledge(&form) {
            log::warn!("newsletter acknowledgement failed: {err}");
        }
    })?;
    Ok(())
}
