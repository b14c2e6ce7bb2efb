//! Theme resolution, application and persistence.
//!
//! DESIGN
//! ======
//! `ThemeService` owns three adapters: the preference store, the document
//! surface carrying the dark marker, and the system color-scheme signal.
//! The browser layer constructs one per page and shares it via `Rc` between
//! every toggle button and the media-query listener; all methods take `&self`.
//!
//! The display follows the stored preference when one exists and the system
//! scheme otherwise. Any call to [`ThemeService::apply_theme`] persists its
//! argument, which permanently stops system tracking for this origin.

#[cfg(test)]
#[path = "theme_service_test.rs"]
mod theme_service_test;

use crate::config::ThemeConfig;
use crate::state::theme::ThemePreference;
use crate::util::preference_store::PreferenceStore;

/// The element whose marker class reflects the active theme.
pub trait ThemeSurface {
    fn is_dark(&self) -> bool;
    fn set_dark(&self, dark: bool);
}

/// Host-reported color scheme (`prefers-color-scheme`).
pub trait ColorSchemeSource {
    /// Current scheme, or `None` when the host cannot report one.
    fn current(&self) -> Option<ThemePreference>;
}

pub struct ThemeService<S, D, M> {
    store: S,
    surface: D,
    system: M,
    config: ThemeConfig,
}

impl<S, D, M> ThemeService<S, D, M>
where
    S: PreferenceStore,
    D: ThemeSurface,
    M: ColorSchemeSource,
{
    pub fn new(store: S, surface: D, system: M, config: ThemeConfig) -> Self {
        Self { store, surface, system, config }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    /// The visitor's explicit choice, if one is stored.
    ///
    /// Unrecognized stored values count as no choice.
    pub fn stored_preference(&self) -> Option<ThemePreference> {
        let raw = self.store.read(&self.config.storage_key)?;
        match raw.parse() {
            Ok(theme) => Some(theme),
            Err(err) => {
                log::warn!("ignoring stored theme: {err}");
                None
            }
        }
    }

    /// Stored preference, else system scheme, else light. No side effects.
    pub fn resolve_initial_theme(&self) -> ThemePreference {
        self.stored_preference()
            .or_else(|| self.system.current())
            .unwrap_or_default()
    }

    /// Theme currently shown by the surface.
    pub fn current_theme(&self) -> ThemePreference {
        ThemePreference::from_dark(self.surface.is_dark())
    }

    /// Show `theme` and store it as the explicit preference.
    pub fn apply_theme(&self, theme: ThemePreference) {
        self.surface.set_dark(theme.is_dark());
        self.store.write(&self.config.storage_key, theme.as_str());
        log::debug!("theme applied: {theme}");
    }

    /// Switch to the opposite of the displayed theme.
    pub fn toggle_theme(&self) -> ThemePreference {
        let next = self.current_theme().toggled();
        self.apply_theme(next);
        next
    }

    /// Follow a system scheme change unless the visitor has chosen explicitly.
    ///
    /// Returns whether the change was applied.
    pub fn on_system_scheme_change(&self, scheme: ThemePreference) -> bool {
        if self.stored_preference().is_some() {
            log::debug!("system scheme changed to {scheme}; explicit preference kept");
            return false;
        }
        self.apply_theme(scheme);
        true
    }

    /// Resolve and show the initial theme for this page load.
    ///
    /// With `persist_initial_theme` the resolved theme is also stored; without
    /// it only the display changes and system tracking stays live until the
    /// first toggle.
    pub fn initialize(&self) -> ThemePreference {
        let theme = self.resolve_initial_theme();
        if self.config.persist_initial_theme {
            self.apply_theme(theme);
        } else {
            self.surface.set_dark(theme.is_dark());
        }
        log::info!("initial theme: {theme}");
        theme
    }
}
