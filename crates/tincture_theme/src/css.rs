//! CSS custom-property projection
//!
//! Styling surfaces that bypass the typed accessors (webview stylesheets,
//! user CSS) read the theme from `--color-<category>-<role>` custom
//! properties on the document root. The projection walks the semantic roles
//! only; the raw token ramps behind the theme's `tokens` back-reference are
//! never projected.
//!
//! Projection is idempotent: re-projecting the same theme writes the same
//! values, and well-behaved [`DocumentTarget`]s treat same-value writes as
//! no-ops.

use crate::theme::{ColorRole, SemanticTheme};
use std::collections::HashMap;
use tincture_core::Color;
use tincture_platform::DocumentTarget;

/// Prefix for every projected custom property
pub const PROPERTY_PREFIX: &str = "--color";

/// Custom-property name for a role, e.g. `--color-status-success-surface`
pub fn css_var_name(role: ColorRole) -> String {
    let (category, role) = role.parts();
    format!("{PROPERTY_PREFIX}-{category}-{}", role.replace('_', "-"))
}

/// Write every role through `color_of`, then the theme-color meta value
pub(crate) fn project(document: &dyn DocumentTarget, color_of: &dyn Fn(ColorRole) -> Color) {
    for role in ColorRole::ALL {
        document.set_property(&css_var_name(role), &color_of(role).to_css_string());
    }
    // Mobile browsers tint their chrome from this value
    document.set_meta_theme_color(&color_of(ColorRole::BackgroundPrimary).to_css_string());
}

/// Project a theme onto a document
pub fn apply_theme(document: &dyn DocumentTarget, theme: &SemanticTheme) {
    project(document, &|role| theme.color(role));
}

/// The projection as a plain map, property name to CSS value
///
/// Same contents as [`apply_theme`] writes, minus the meta value; useful for
/// serializing a stylesheet or diffing two themes.
pub fn variable_map(theme: &SemanticTheme) -> HashMap<String, String> {
    let mut vars = HashMap::with_capacity(ColorRole::ALL.len());
    for role in ColorRole::ALL {
        vars.insert(css_var_name(role), theme.color(role).to_css_string());
    }
    vars
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::themes::StandardTheme;

    #[test]
    fn test_var_names_join_parts_with_the_fixed_prefix() {
        assert_eq!(
            css_var_name(ColorRole::BackgroundPrimary),
            "--color-background-primary"
        );
        assert_eq!(
            css_var_name(ColorRole::StatusSuccessSurface),
            "--color-status-success-surface"
        );
        assert_eq!(
            css_var_name(ColorRole::NavigationTextActive),
            "--color-navigation-text-active"
        );
    }

    #[test]
    fn test_variable_map_covers_every_role_exactly_once() {
        let vars = variable_map(&StandardTheme::light());
        assert_eq!(vars.len(), ColorRole::ALL.len());
        for role in ColorRole::ALL {
            assert!(vars.contains_key(&css_var_name(role)), "{}", role.path());
        }
    }

    #[test]
    fn test_raw_token_ramps_are_not_projected() {
        let vars = variable_map(&StandardTheme::light());
        assert!(!vars.keys().any(|name| name.contains("tokens")));
        assert!(!vars.keys().any(|name| name.contains("-50")));
    }
}
