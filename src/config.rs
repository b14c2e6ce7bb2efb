//! Page-level configuration for all site behaviors.
//!
//! Defaults match the markup shipped with the site. A page may override any
//! field through a `<script type="application/json" id="site-config">`
//! element; missing fields keep their defaults and unknown fields are
//! rejected.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use serde::Deserialize;

use crate::error::SiteError;

pub const DEFAULT_STORAGE_KEY: &str = "architecture-theme";
pub const DEFAULT_DARK_CLASS: &str = "dark";
pub const DEFAULT_FILTER_ALL: &str = "ALL";
pub const DEFAULT_FADE_DELAY_MS: u64 = 50;

/// Element id of the optional JSON override document.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// Theme-related settings consumed by [`crate::ThemeService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeConfig {
    pub storage_key: String,
    /// Persist the theme resolved on load, latching out system tracking.
    pub persist_initial_theme: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self { storage_key: DEFAULT_STORAGE_KEY.to_owned(), persist_initial_theme: true }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub storage_key: String,
    pub dark_class: String,
    pub persist_initial_theme: bool,
    pub theme_toggle_selector: String,
    pub menu_button_selector: String,
    pub menu_selector: String,
    pub menu_active_class: String,
    pub filter_button_selector: String,
    pub filter_item_selector: String,
    pub filter_active_class: String,
    pub filter_all: String,
    pub fade_delay_ms: u64,
    pub anchor_selector: String,
    pub newsletter_selector: String,
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            dark_class: DEFAULT_DARK_CLASS.to_owned(),
            persist_initial_theme: true,
            theme_toggle_selector: ".theme-toggle".to_owned(),
            menu_button_selector: ".mobile-menu-btn".to_owned(),
            menu_selector: ".mobile-menu".to_owned(),
            menu_active_class: "active".to_owned(),
            filter_button_selector: ".filter-btn".to_owned(),
            filter_item_selector: "[data-category]".to_owned(),
            filter_active_class: "active".to_owned(),
            filter_all: DEFAULT_FILTER_ALL.to_owned(),
            fade_delay_ms: DEFAULT_FADE_DELAY_MS,
            anchor_selector: "a[href^=\"#\"]".to_owned(),
            newsletter_selector: ".newsletter-form".to_owned(),
            log_level: "warn".to_owned(),
        }
    }
}

impl SiteConfig {
    /// Parse an override document. Blank input yields the defaults.
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    #[must_use]
    pub fn theme(&self) -> ThemeConfig {
        ThemeConfig {
            storage_key: self.storage_key.clone(),
            persist_initial_theme: self.persist_initial_theme,
        }
    }

    /// Console log level; unrecognized names fall back to `warn`.
    #[must_use]
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Warn)
    }

    #[must_use]
    pub fn fade_delay(&self) -> Duration {
        Duration::from_millis(self.fade_delay_ms)
    }
}
