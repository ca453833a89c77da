use std::sync::Arc;
use tincture_platform::{
    MemoryDocument, MemoryPreferences, PreferenceStore, StaticScheme, StoreError,
};
use tincture_theme::{ColorRole, ColorScheme, StandardTheme, ThemeContext, TOKENS};

struct Harness {
    prefs: Arc<MemoryPreferences>,
    doc: Arc<MemoryDocument>,
    context: ThemeContext,
}

fn harness(prefs: MemoryPreferences, os: Option<ColorScheme>) -> Harness {
    let prefs = Arc::new(prefs);
    let doc = Arc::new(MemoryDocument::new());
    let context = ThemeContext::new(
        StandardTheme::bundle(),
        prefs.clone(),
        doc.clone(),
        Arc::new(StaticScheme(os)),
    );
    Harness {
        prefs,
        doc,
        context,
    }
}

#[test]
fn fresh_session_follows_os_dark_preference() {
    let h = harness(MemoryPreferences::new(), Some(ColorScheme::Dark));
    assert!(!h.context.mounted());

    h.context.init();

    assert!(h.context.mounted());
    assert_eq!(h.context.scheme(), ColorScheme::Dark);
    assert_eq!(
        h.doc.meta_theme_color(),
        Some(
            StandardTheme::dark()
                .background
                .primary
                .to_css_string()
        )
    );
}

#[test]
fn persisted_preference_wins_over_os_signal() {
    let h = harness(
        MemoryPreferences::with_stored(ColorScheme::Light),
        Some(ColorScheme::Dark),
    );
    h.context.init();
    assert_eq!(h.context.scheme(), ColorScheme::Light);
}

#[test]
fn defaults_to_light_when_every_source_is_silent() {
    let h = harness(MemoryPreferences::new(), None);
    h.context.init();
    assert!(h.context.mounted());
    assert_eq!(h.context.scheme(), ColorScheme::Light);
}

#[test]
fn init_is_idempotent() {
    let h = harness(MemoryPreferences::new(), Some(ColorScheme::Dark));
    h.context.init();
    h.context.init();
    assert_eq!(h.context.scheme(), ColorScheme::Dark);
}

#[test]
fn toggle_is_its_own_inverse_and_persists_each_step() {
    let h = harness(MemoryPreferences::new(), None);
    h.context.init();
    let original = h.context.scheme();

    h.context.toggle_scheme();
    assert_eq!(h.context.scheme(), original.toggle());
    assert_eq!(h.prefs.stored(), Some(h.context.scheme()));

    h.context.toggle_scheme();
    assert_eq!(h.context.scheme(), original);
    assert_eq!(h.prefs.stored(), Some(original));
}

#[test]
fn unknown_scheme_name_corrects_to_light() {
    let h = harness(MemoryPreferences::new(), Some(ColorScheme::Dark));
    h.context.init();
    assert_eq!(h.context.scheme(), ColorScheme::Dark);

    h.context.set_scheme_by_name("purple");

    assert_eq!(h.context.scheme(), ColorScheme::Light);
    assert_eq!(h.prefs.stored(), Some(ColorScheme::Light));
}

#[test]
fn os_change_is_followed_while_no_explicit_choice_exists() {
    let h = harness(MemoryPreferences::new(), Some(ColorScheme::Light));
    h.context.init();
    assert_eq!(h.context.scheme(), ColorScheme::Light);

    h.context.handle_system_scheme_change(ColorScheme::Dark);

    assert_eq!(h.context.scheme(), ColorScheme::Dark);
    // Following the OS is not an explicit choice and is never persisted
    assert_eq!(h.prefs.stored(), None);
}

#[test]
fn explicit_choice_pins_the_scheme_against_os_changes() {
    let h = harness(MemoryPreferences::new(), Some(ColorScheme::Light));
    h.context.init();

    h.context.set_scheme(ColorScheme::Dark);
    h.context.handle_system_scheme_change(ColorScheme::Light);

    assert_eq!(h.context.scheme(), ColorScheme::Dark);
}

#[test]
fn persisted_choice_from_an_earlier_session_counts_as_explicit() {
    let h = harness(
        MemoryPreferences::with_stored(ColorScheme::Dark),
        Some(ColorScheme::Dark),
    );
    h.context.init();

    h.context.handle_system_scheme_change(ColorScheme::Light);

    assert_eq!(h.context.scheme(), ColorScheme::Dark);
}

#[test]
fn preference_survives_into_a_new_context() {
    let prefs = Arc::new(MemoryPreferences::new());
    let first = ThemeContext::new(
        StandardTheme::bundle(),
        prefs.clone(),
        Arc::new(MemoryDocument::new()),
        Arc::new(StaticScheme(None)),
    );
    first.init();
    first.set_scheme(ColorScheme::Dark);

    let second = ThemeContext::new(
        StandardTheme::bundle(),
        prefs.clone(),
        Arc::new(MemoryDocument::new()),
        Arc::new(StaticScheme(Some(ColorScheme::Light))),
    );
    second.init();

    assert_eq!(second.scheme(), ColorScheme::Dark);
}

struct BrokenStore;

impl PreferenceStore for BrokenStore {
    fn load(&self) -> Result<Option<ColorScheme>, StoreError> {
        Err(StoreError::Unavailable("backing store offline".into()))
    }

    fn save(&self, _scheme: ColorScheme) -> Result<(), StoreError> {
        Err(StoreError::Write("backing store offline".into()))
    }
}

#[test]
fn store_failures_never_block_the_in_memory_state() {
    let context = ThemeContext::new(
        StandardTheme::bundle(),
        Arc::new(BrokenStore),
        Arc::new(MemoryDocument::new()),
        Arc::new(StaticScheme(Some(ColorScheme::Dark))),
    );

    // A failed read degrades to the OS signal
    context.init();
    assert!(context.mounted());
    assert_eq!(context.scheme(), ColorScheme::Dark);

    // A failed write still flips the visible theme
    context.set_scheme(ColorScheme::Light);
    assert_eq!(context.scheme(), ColorScheme::Light);

    // And the explicit choice still pins against later OS changes
    context.handle_system_scheme_change(ColorScheme::Dark);
    assert_eq!(context.scheme(), ColorScheme::Light);
}

#[test]
fn overrides_win_until_cleared() {
    let h = harness(MemoryPreferences::new(), None);
    h.context.init();

    let mapped = h.context.color(ColorRole::BrandPrimary);
    let replacement = TOKENS.accent.s500;
    assert_ne!(mapped, replacement);

    h.context.set_color_override(ColorRole::BrandPrimary, replacement);
    assert_eq!(h.context.color(ColorRole::BrandPrimary), replacement);

    // Overrides are scheme-independent
    h.context.toggle_scheme();
    assert_eq!(h.context.color(ColorRole::BrandPrimary), replacement);

    h.context.clear_overrides();
    assert_eq!(
        h.context.color(ColorRole::BrandPrimary),
        StandardTheme::dark().brand.primary
    );
}
