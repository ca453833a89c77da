use std::sync::Arc;
use tincture_platform::{MemoryDocument, MemoryPreferences, StaticScheme};
use tincture_theme::{ColorRole, ColorScheme, Palette, Shade, StandardTheme, ThemeContext, TOKENS};

fn context(os: Option<ColorScheme>) -> ThemeContext {
    ThemeContext::new(
        StandardTheme::bundle(),
        Arc::new(MemoryPreferences::new()),
        Arc::new(MemoryDocument::new()),
        Arc::new(StaticScheme(os)),
    )
}

#[test]
fn resolve_works_before_and_after_init() {
    let ctx = context(Some(ColorScheme::Dark));

    // Unmounted contexts resolve against the default scheme
    assert_eq!(
        ctx.resolve("text.primary"),
        StandardTheme::light().text.primary
    );

    ctx.init();
    assert_eq!(
        ctx.resolve("text.primary"),
        StandardTheme::dark().text.primary
    );
}

#[test]
fn every_role_path_resolves_to_its_typed_color() {
    let ctx = context(None);
    ctx.init();
    for role in ColorRole::ALL {
        assert_eq!(ctx.resolve(&role.path()), ctx.color(role), "{}", role.path());
    }
}

#[test]
fn invalid_paths_share_the_text_primary_fallback() {
    let ctx = context(None);
    ctx.init();

    let fallback = ctx.color(ColorRole::TextPrimary);
    for path in ["does.not.exist", "brand", "brand.unknown", "", "a.b.c"] {
        assert_eq!(ctx.resolve(path), fallback, "{path:?}");
    }
}

#[test]
fn resolve_many_returns_a_same_shaped_mapping() {
    let ctx = context(None);
    ctx.init();

    let colors = ctx.resolve_many(&[
        ("heading", "text.primary"),
        ("card", "surface.elevated"),
        ("cta", "brand.primary"),
        ("bogus", "no.such.role"),
    ]);

    assert_eq!(colors.len(), 4);
    assert_eq!(colors["heading"], ctx.color(ColorRole::TextPrimary));
    assert_eq!(colors["card"], ctx.color(ColorRole::SurfaceElevated));
    assert_eq!(colors["cta"], ctx.color(ColorRole::BrandPrimary));
    assert_eq!(colors["bogus"], ctx.color(ColorRole::TextPrimary));
}

#[test]
fn raw_token_paths_bypass_the_semantic_mapping() {
    let ctx = context(None);
    ctx.init();

    assert_eq!(ctx.resolve_token("primary.600"), TOKENS.primary.s600);
    assert_eq!(ctx.resolve_token("neutral.950"), TOKENS.neutral.s950);
    assert_eq!(ctx.token(Palette::Warning, Shade::S300), TOKENS.warning.s300);

    // Raw tokens are scheme-independent
    ctx.set_scheme(ColorScheme::Dark);
    assert_eq!(ctx.resolve_token("primary.600"), TOKENS.primary.s600);
}

#[test]
fn malformed_token_paths_fall_back_like_semantic_misses() {
    let ctx = context(None);
    ctx.init();

    let fallback = ctx.color(ColorRole::TextPrimary);
    for path in ["primary.601", "magenta.500", "primary", "primary.dark"] {
        assert_eq!(ctx.resolve_token(path), fallback, "{path:?}");
    }
}

#[test]
fn overrides_flow_through_path_resolution() {
    let ctx = context(None);
    ctx.init();

    let replacement = TOKENS.error.s500;
    ctx.set_color_override(ColorRole::BrandPrimary, replacement);

    assert_eq!(ctx.resolve("brand.primary"), replacement);
    assert_eq!(ctx.resolve_many(&[("cta", "brand.primary")])["cta"], replacement);
}
