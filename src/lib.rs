//! # studio-site
//!
//! WASM behavior layer for the studio's static marketing site. The pages are
//! plain pre-rendered HTML; this crate attaches theme persistence, the mobile
//! menu, portfolio category filters, smooth anchor scrolling and the
//! newsletter stub once the document is ready.
//!
//! State models (`state`) and environment-independent helpers (`util`) build
//! and test natively. Browser wiring lives in `dom` behind the `hydrate`
//! feature.

pub mod config;
pub mod error;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
pub mod dom;

pub use config::SiteConfig;
pub use error::SiteError;
pub use state::theme::ThemePreference;
pub use util::theme_service::ThemeService;

/// WASM entry point: installs panic/log hooks and schedules page initialization.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    dom::boot();
}
