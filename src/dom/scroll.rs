//! Smooth scrolling for in-page anchor links.

use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use super::{current_element, listen, select_all};
use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::util::anchor::fragment_target;

/// Intercept fragment links whose target exists; everything else keeps the
/// browser's default navigation.
pub fn install(document: &Document, config: &SiteConfig) -> Result<(), SiteError> {
    let anchors = select_all(document, &config.anchor_selector)?;
    if anchors.is_empty() {
        return Ok(());
    }

    let doc = document.clone();
    listen(&anchors, "click", move |event| {
        let Some(href) = current_element::<Element>(&event).and_then(|a| a.get_attribute("href")) else {
            return;
        };
        let Some(id) = fragment_target(&href) else {
            return;
        };
        let Some(target) = doc.get_element_by_id(id) else {
            log::debug!("anchor #{id} has no target");
            return;
        };

        event.prevent_default();
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    })?;
    log::debug!("{} anchor links bound", anchors.len());
    Ok(())
}
