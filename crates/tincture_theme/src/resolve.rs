//! Dynamic color resolution
//!
//! Component code holds [`ColorRole`] values and calls
//! [`ThemeContext::color`]; that path is total and cannot miss. The dotted
//! string forms here (`"brand.primary"`, `"primary.600"`) exist for
//! config-driven consumers — host configuration files, scripting bridges,
//! style sheets authored outside the crate — and degrade instead of
//! failing: an unresolved path warns and falls back to the theme's
//! `text.primary` (itself never absent in a constructed theme; the absolute
//! fallback is `Color::default()`, black).

use crate::state::ThemeContext;
use crate::theme::ColorRole;
use crate::tokens::{Palette, Shade};
use rustc_hash::FxHashMap;
use tincture_core::Color;

/// Parse a raw token path like `"primary.600"`
///
/// The explicit, fallible accessor; [`ThemeContext::resolve_token`] wraps it
/// with the fallback contract.
pub fn parse_token_path(path: &str) -> Option<(Palette, Shade)> {
    let (palette, shade) = path.split_once('.')?;
    let palette = Palette::from_name(palette)?;
    let shade = Shade::from_index(shade.parse().ok()?)?;
    Some((palette, shade))
}

impl ThemeContext {
    /// Resolve a dotted semantic path against the active theme
    ///
    /// Never panics; unknown paths warn and resolve to `text.primary`.
    pub fn resolve(&self, path: &str) -> Color {
        match ColorRole::parse(path) {
            Some(role) => self.color(role),
            None => {
                tracing::warn!(path, "unresolved semantic color path, using text.primary");
                self.color(ColorRole::TextPrimary)
            }
        }
    }

    /// Resolve a keyed set of semantic paths in one call
    ///
    /// Returns a map with the same keys; each entry follows the same
    /// fallback contract as [`ThemeContext::resolve`].
    pub fn resolve_many(&self, paths: &[(&str, &str)]) -> FxHashMap<String, Color> {
        paths
            .iter()
            .map(|(key, path)| ((*key).to_owned(), self.resolve(path)))
            .collect()
    }

    /// Resolve a raw token path like `"primary.600"`, bypassing the
    /// semantic mapping
    ///
    /// Reads the active theme's token back-reference; unknown palettes or
    /// shades warn and resolve to `text.primary`.
    pub fn resolve_token(&self, path: &str) -> Color {
        match parse_token_path(path) {
            Some((palette, shade)) => self.token(palette, shade),
            None => {
                tracing::warn!(path, "unresolved token path, using text.primary");
                self.color(ColorRole::TextPrimary)
            }
        }
    }

    /// Typed raw token access; total over palette and shade
    pub fn token(&self, palette: Palette, shade: Shade) -> Color {
        self.theme().tokens.get(palette, shade)
    }
}
