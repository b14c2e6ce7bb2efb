//! Theme adapters over `localStorage`, the `<html>` class list and the
//! `prefers-color-scheme` media query.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, MediaQueryList, MediaQueryListEvent, Storage, Window};

use super::{listen, select_all};
use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::state::theme::ThemePreference;
use crate::util::preference_store::{NullStore, PreferenceStore};
use crate::util::theme_service::{ColorSchemeSource, ThemeService, ThemeSurface};

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// `localStorage`, or nothing when the browser refuses access.
pub enum BrowserStore {
    Local(Storage),
    Unavailable,
}

impl BrowserStore {
    pub fn open(window: &Window) -> Self {
        match window.local_storage() {
            Ok(Some(storage)) => Self::Local(storage),
            Ok(None) => {
                log::info!("localStorage unavailable; theme choice lasts for this page only");
                Self::Unavailable
            }
            Err(err) => {
                log::warn!("localStorage blocked ({}); theme choice lasts for this page only", SiteError::from(err));
                Self::Unavailable
            }
        }
    }
}

impl PreferenceStore for BrowserStore {
    fn read(&self, key: &str) -> Option<String> {
        match self {
            Self::Local(storage) => storage.get_item(key).ok().flatten(),
            Self::Unavailable => NullStore.read(key),
        }
    }

    fn write(&self, key: &str, value: &str) {
        match self {
            Self::Local(storage) => {
                if let Err(err) = storage.set_item(key, value) {
                    log::warn!("could not store '{key}': {}", SiteError::from(err));
                }
            }
            Self::Unavailable => NullStore.write(key, value),
        }
    }
}

/// Marker class on the document root.
pub struct RootClass {
    root: Element,
    class: String,
}

impl RootClass {
    pub fn new(root: Element, class: &str) -> Self {
        Self { root, class: class.to_owned() }
    }
}

impl ThemeSurface for RootClass {
    fn is_dark(&self) -> bool {
        self.root.class_list().contains(&self.class)
    }

    fn set_dark(&self, dark: bool) {
        if let Err(err) = self.root.class_list().toggle_with_force(&self.class, dark) {
            log::warn!("could not toggle '{}': {}", self.class, SiteError::from(err));
        }
    }
}

pub struct MediaScheme {
    query: Option<MediaQueryList>,
}

impl MediaScheme {
    pub fn open(window: &Window) -> Self {
        Self { query: window.match_media(DARK_SCHEME_QUERY).ok().flatten() }
    }

    pub fn query(&self) -> Option<&MediaQueryList> {
        self.query.as_ref()
    }
}

impl ColorSchemeSource for MediaScheme {
    fn current(&self) -> Option<ThemePreference> {
        self.query.as_ref().map(|query| ThemePreference::from_dark(query.matches()))
    }
}

pub type PageThemeService = ThemeService<BrowserStore, RootClass, MediaScheme>;

/// Apply the initial theme, bind every toggle and follow system changes.
pub fn install(document: &Document, config: &SiteConfig) -> Result<(), SiteError> {
    let window = web_sys::window().ok_or_else(|| SiteError::MissingElement("window".to_owned()))?;
    let root = document
        .document_element()
        .ok_or_else(|| SiteError::MissingElement("html".to_owned()))?;

    let scheme = MediaScheme::open(&window);
    let query = scheme.query().cloned();
    let service: Rc<PageThemeService> = Rc::new(ThemeService::new(
        BrowserStore::open(&window),
        RootClass::new(root, &config.dark_class),
        scheme,
        config.theme(),
    ));
    service.initialize();

    let toggles = select_all(document, &config.theme_toggle_selector)?;
    let svc = Rc::clone(&service);
    listen(&toggles, "click", move |_event| {
        svc.toggle_theme();
    })?;
    log::debug!("{} theme toggles bound", toggles.len());

    if let Some(query) = query {
        let svc = Rc::clone(&service);
        let fallback = query.clone();
        listen(std::slice::from_ref(&query), "change", move |event| {
            let dark = event
                .dyn_ref::<MediaQueryListEvent>()
                .map_or_else(|| fallback.matches(), MediaQueryListEvent::matches);
            svc.on_system_scheme_change(ThemePreference::from_dark(dark));
        })?;
    } else {
        log::debug!("matchMedia unavailable; system scheme changes not tracked");
    }
    Ok(())
}
