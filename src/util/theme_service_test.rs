use super::*;
use crate::util::preference_store::{MemoryStore, NullStore};
use std::cell::Cell;

const KEY: &str = "architecture-theme";

#[derive(Default)]
struct RootClass {
    dark: Cell<bool>,
}

impl ThemeSurface for RootClass {
    fn is_dark(&self) -> bool {
        self.dark.get()
    }

    fn set_dark(&self, dark: bool) {
        self.dark.set(dark);
    }
}

struct Scheme(Option<ThemePreference>);

impl ColorSchemeSource for Scheme {
    fn current(&self) -> Option<ThemePreference> {
        self.0
    }
}

fn service<S: PreferenceStore>(store: S, system: Option<ThemePreference>) -> ThemeService<S, RootClass, Scheme> {
    ThemeService::new(store, RootClass::default(), Scheme(system), ThemeConfig::default())
}

fn stored(svc: &ThemeService<MemoryStore, RootClass, Scheme>) -> Option<String> {
    svc.store().read(KEY)
}

// =============================================================
// resolve_initial_theme
// =============================================================

#[test]
fn resolve_follows_system_when_nothing_stored() {
    for system in [ThemePreference::Light, ThemePreference::Dark] {
        let svc = service(MemoryStore::new(), Some(system));
        assert_eq!(svc.resolve_initial_theme(), system);
    }
}

#[test]
fn resolve_prefers_stored_value_over_system() {
    let svc = service(MemoryStore::with_entry(KEY, "light"), Some(ThemePreference::Dark));
    assert_eq!(svc.resolve_initial_theme(), ThemePreference::Light);
}

#[test]
fn resolve_defaults_to_light_without_any_source() {
    let svc = service(NullStore, None);
    assert_eq!(svc.resolve_initial_theme(), ThemePreference::Light);
}

#[test]
fn resolve_has_no_side_effects() {
    let svc = service(MemoryStore::new(), Some(ThemePreference::Dark));
    svc.resolve_initial_theme();
    assert_eq!(stored(&svc), None);
    assert!(!svc.surface().is_dark());
}

#[test]
fn resolve_ignores_unrecognized_stored_value() {
    let svc = service(MemoryStore::with_entry(KEY, "sepia"), Some(ThemePreference::Dark));
    assert_eq!(svc.stored_preference(), None);
    assert_eq!(svc.resolve_initial_theme(), ThemePreference::Dark);
}

// =============================================================
// apply_theme / toggle_theme
// =============================================================

#[test]
fn apply_sets_marker_and_persists() {
    let svc = service(MemoryStore::new(), None);
    svc.apply_theme(ThemePreference::Dark);
    assert!(svc.surface().is_dark());
    assert_eq!(stored(&svc).as_deref(), Some("dark"));

    svc.apply_theme(ThemePreference::Light);
    assert!(!svc.surface().is_dark());
    assert_eq!(stored(&svc).as_deref(), Some("light"));
}

#[test]
fn apply_latches_out_system_changes() {
    let svc = service(MemoryStore::new(), Some(ThemePreference::Light));
    svc.apply_theme(ThemePreference::Light);
    assert!(!svc.on_system_scheme_change(ThemePreference::Dark));
    assert!(!svc.on_system_scheme_change(ThemePreference::Dark));
    assert_eq!(svc.current_theme(), ThemePreference::Light);
    assert_eq!(stored(&svc).as_deref(), Some("light"));
}

#[test]
fn system_tracking_resumes_once_store_is_cleared() {
    let svc = service(MemoryStore::new(), None);
    svc.apply_theme(ThemePreference::Light);
    svc.store().remove(KEY);
    assert!(svc.on_system_scheme_change(ThemePreference::Dark));
    assert_eq!(svc.current_theme(), ThemePreference::Dark);
}

#[test]
fn toggle_flips_display_and_store() {
    let svc = service(MemoryStore::new(), None);
    svc.apply_theme(ThemePreference::Light);
    assert_eq!(svc.toggle_theme(), ThemePreference::Dark);
    assert!(svc.surface().is_dark());
    assert_eq!(stored(&svc).as_deref(), Some("dark"));
}

#[test]
fn toggle_twice_restores_display_and_store() {
    for start in [ThemePreference::Light, ThemePreference::Dark] {
        let svc = service(MemoryStore::new(), None);
        svc.apply_theme(start);
        svc.toggle_theme();
        svc.toggle_theme();
        assert_eq!(svc.current_theme(), start);
        assert_eq!(stored(&svc).as_deref(), Some(start.as_str()));
    }
}

#[test]
fn toggle_reads_the_display_not_the_store() {
    let svc = service(MemoryStore::with_entry(KEY, "dark"), None);
    // Display still light: nothing applied yet.
    assert_eq!(svc.toggle_theme(), ThemePreference::Dark);
}

// =============================================================
// on_system_scheme_change
// =============================================================

#[test]
fn system_change_applies_without_explicit_preference() {
    let svc = service(MemoryStore::new(), None);
    assert!(svc.on_system_scheme_change(ThemePreference::Dark));
    assert!(svc.surface().is_dark());
    assert_eq!(stored(&svc).as_deref(), Some("dark"));
}

#[test]
fn system_change_keeps_tracking_with_disabled_storage() {
    let svc = service(NullStore, Some(ThemePreference::Light));
    svc.initialize();
    assert!(svc.on_system_scheme_change(ThemePreference::Dark));
    assert_eq!(svc.current_theme(), ThemePreference::Dark);
    assert!(svc.on_system_scheme_change(ThemePreference::Light));
    assert_eq!(svc.current_theme(), ThemePreference::Light);
}

#[test]
fn toggle_still_works_with_disabled_storage() {
    let svc = service(NullStore, None);
    svc.initialize();
    assert_eq!(svc.toggle_theme(), ThemePreference::Dark);
    assert_eq!(svc.current_theme(), ThemePreference::Dark);
}

// =============================================================
// initialize
// =============================================================

#[test]
fn initialize_with_system_dark_persists_dark() {
    let svc = service(MemoryStore::new(), Some(ThemePreference::Dark));
    assert_eq!(svc.initialize(), ThemePreference::Dark);
    assert!(svc.surface().is_dark());
    assert_eq!(stored(&svc).as_deref(), Some("dark"));
}

#[test]
fn initialize_with_stored_light_ignores_later_system_dark() {
    let svc = service(MemoryStore::with_entry(KEY, "light"), Some(ThemePreference::Light));
    svc.initialize();
    assert!(!svc.on_system_scheme_change(ThemePreference::Dark));
    assert_eq!(svc.current_theme(), ThemePreference::Light);
}

#[test]
fn initialize_without_persisting_keeps_system_tracking() {
    let config = ThemeConfig { persist_initial_theme: false, ..ThemeConfig::default() };
    let svc = ThemeService::new(MemoryStore::new(), RootClass::default(), Scheme(Some(ThemePreference::Dark)), config);
    assert_eq!(svc.initialize(), ThemePreference::Dark);
    assert!(svc.surface().is_dark());
    assert_eq!(svc.store().read(KEY), None);

    assert!(svc.on_system_scheme_change(ThemePreference::Light));
    assert_eq!(svc.current_theme(), ThemePreference::Light);
}

#[test]
fn initialize_without_persisting_latches_on_first_toggle() {
    let config = ThemeConfig { persist_initial_theme: false, ..ThemeConfig::default() };
    let svc = ThemeService::new(MemoryStore::new(), RootClass::default(), Scheme(None), config);
    svc.initialize();
    svc.toggle_theme();
    assert_eq!(svc.store().read(KEY).as_deref(), Some("dark"));
    assert!(!svc.on_system_scheme_change(ThemePreference::Light));
}

#[test]
fn initialize_uses_configured_key() {
    let config = ThemeConfig { storage_key: "studio".to_owned(), persist_initial_theme: true };
    let svc = ThemeService::new(MemoryStore::new(), RootClass::default(), Scheme(Some(ThemePreference::Dark)), config);
    svc.initialize();
    assert_eq!(svc.store().read("studio").as_deref(), Some("dark"));
    assert_eq!(svc.store().read(KEY), None);
}
