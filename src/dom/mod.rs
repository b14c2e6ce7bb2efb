//! Browser wiring for every site behavior.
//!
//! SYSTEM CONTEXT
//! ==============
//! `boot` runs from the WASM start function. It reads the page config,
//! starts console logging and runs `init_page` once the document has parsed.
//! Each behavior installs independently: a failure is logged and the rest
//! still install.

pub mod filter;
pub mod menu;
pub mod newsletter;
pub mod scroll;
pub mod theme;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, NodeList};

use crate::config::{CONFIG_ELEMENT_ID, SiteConfig};
use crate::error::SiteError;

type Install = fn(&Document, &SiteConfig) -> Result<(), SiteError>;

const BEHAVIORS: [(&str, Install); 5] = [
    ("theme", theme::install),
    ("menu", menu::install),
    ("filter", filter::install),
    ("scroll", scroll::install),
    ("newsletter", newsletter::install),
];

/// Load config, start logging and initialize the page when the DOM is ready.
pub fn boot() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let (config, config_err) = match load_config(&document) {
        Ok(config) => (config, None),
        Err(err) => (SiteConfig::default(), Some(err)),
    };
    let _ = console_log::init_with_level(config.log_level());
    if let Some(err) = config_err {
        log::warn!("{err}; using default site config");
    }

    if document.ready_state() == "loading" {
        let doc = document.clone();
        let on_ready = Closure::once_into_js(move |_event: Event| init_page(&doc, &config));
        if let Err(err) = document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref()) {
            log::error!("cannot wait for DOMContentLoaded: {}", SiteError::from(err));
        }
    } else {
        init_page(&document, &config);
    }
}

/// Install every behavior against an already-parsed document.
pub fn init_page(document: &Document, config: &SiteConfig) {
    for (name, install) in BEHAVIORS {
        match install(document, config) {
            Ok(()) => log::debug!("{name} installed"),
            Err(err) => log::warn!("{name} not installed: {err}"),
        }
    }
}

/// Config from the page's JSON override element, or defaults when absent.
fn load_config(document: &Document) -> Result<SiteConfig, SiteError> {
    let raw = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
        .unwrap_or_default();
    SiteConfig::from_json(&raw)
}

pub(crate) fn collect_elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub(crate) fn select_all(document: &Document, selector: &str) -> Result<Vec<Element>, SiteError> {
    Ok(collect_elements(&document.query_selector_all(selector)?))
}

/// The element that the listener was attached to.
pub(crate) fn current_element<T: JsCast>(event: &Event) -> Option<T> {
    event.current_target().and_then(|target| target.dyn_into::<T>().ok())
}

/// Register one handler on every target and keep it for the page lifetime.
pub(crate) fn listen<T, F>(targets: &[T], event: &str, handler: F) -> Result<(), SiteError>
where
    T: AsRef<EventTarget>,
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    let callback: &js_sys::Function = closure.as_ref().unchecked_ref();
    for target in targets {
        target.as_ref().add_event_listener_with_callback(event, callback)?;
    }
    closure.forget();
    Ok(())
}
