//! The standard Tincture theme
//!
//! Light and dark are mapped independently, role by role. Dark is not an
//! inversion of light: interactive states brighten instead of darkening,
//! status surfaces switch from pale tints to translucent washes, and the
//! modal overlay flips from a dark scrim to a light elevation wash.

use crate::theme::{
    AccentColors, BackgroundColors, BorderColors, BrandColors, ColorScheme, InteractiveColors,
    NavigationColors, SemanticTheme, StatusColors, SurfaceColors, TextColors, ThemeBundle,
};
use crate::tokens::TOKENS;

/// Builder for the built-in light/dark pair
pub struct StandardTheme;

impl StandardTheme {
    /// Project the light variant from the token store
    pub fn light() -> SemanticTheme {
        let t = &TOKENS;
        SemanticTheme {
            scheme: ColorScheme::Light,
            background: BackgroundColors {
                primary: t.neutral.s50,
                secondary: t.neutral.s100,
                tertiary: t.neutral.s200,
            },
            text: TextColors {
                primary: t.neutral.s900,
                secondary: t.neutral.s700,
                muted: t.neutral.s500,
                inverse: t.neutral.s50,
                link: t.primary.s600,
            },
            brand: BrandColors {
                primary: t.primary.s600,
                secondary: t.secondary.s600,
                contrast: t.neutral.s50,
            },
            surface: SurfaceColors {
                primary: t.neutral.s50,
                elevated: t.neutral.s100,
                // Dark scrim behind modal content
                overlay: t.neutral.s900.with_alpha(0.4),
                sunken: t.neutral.s200,
            },
            border: BorderColors {
                primary: t.neutral.s200,
                secondary: t.neutral.s300,
                focus: t.primary.s500,
                error: t.error.s600,
            },
            interactive: InteractiveColors {
                hover: t.primary.s700,
                active: t.primary.s800,
                focus: t.primary.s500.with_alpha(0.35),
                disabled: t.neutral.s300,
            },
            status: StatusColors {
                success: t.success.s600,
                success_surface: t.success.s50,
                warning: t.warning.s600,
                warning_surface: t.warning.s50,
                error: t.error.s600,
                error_surface: t.error.s50,
                info: t.info.s600,
                info_surface: t.info.s50,
            },
            navigation: NavigationColors {
                background: t.neutral.s100,
                text: t.neutral.s700,
                text_active: t.primary.s600,
                border: t.neutral.s200,
            },
            accent: AccentColors {
                primary: t.accent.s600,
                muted: t.accent.s500.with_alpha(0.15),
                emphasis: t.accent.s700,
            },
            tokens: t,
        }
    }

    /// Project the dark variant from the token store
    pub fn dark() -> SemanticTheme {
        let t = &TOKENS;
        SemanticTheme {
            scheme: ColorScheme::Dark,
            background: BackgroundColors {
                primary: t.neutral.s950,
                secondary: t.neutral.s900,
                tertiary: t.neutral.s800,
            },
            text: TextColors {
                primary: t.neutral.s100,
                secondary: t.neutral.s300,
                muted: t.neutral.s400,
                inverse: t.neutral.s950,
                link: t.primary.s400,
            },
            brand: BrandColors {
                primary: t.primary.s500,
                secondary: t.secondary.s400,
                contrast: t.neutral.s950,
            },
            surface: SurfaceColors {
                primary: t.neutral.s900,
                elevated: t.neutral.s800,
                // Light elevation wash, not a shadow scrim
                overlay: t.neutral.s50.with_alpha(0.08),
                sunken: t.neutral.s950,
            },
            border: BorderColors {
                primary: t.neutral.s800,
                secondary: t.neutral.s700,
                focus: t.primary.s400,
                error: t.error.s500,
            },
            interactive: InteractiveColors {
                // Brighten on interaction; darkening disappears on dark surfaces
                hover: t.primary.s400,
                active: t.primary.s300,
                focus: t.primary.s400.with_alpha(0.4),
                disabled: t.neutral.s700,
            },
            status: StatusColors {
                success: t.success.s400,
                success_surface: t.success.s500.with_alpha(0.15),
                warning: t.warning.s400,
                warning_surface: t.warning.s500.with_alpha(0.15),
                error: t.error.s400,
                error_surface: t.error.s500.with_alpha(0.15),
                info: t.info.s400,
                info_surface: t.info.s500.with_alpha(0.15),
            },
            navigation: NavigationColors {
                background: t.neutral.s900,
                text: t.neutral.s300,
                text_active: t.primary.s400,
                border: t.neutral.s800,
            },
            accent: AccentColors {
                primary: t.accent.s400,
                muted: t.accent.s400.with_alpha(0.2),
                emphasis: t.accent.s300,
            },
            tokens: t,
        }
    }

    /// The light/dark pair as a bundle
    pub fn bundle() -> ThemeBundle {
        ThemeBundle::new("Standard", Self::light(), Self::dark())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ColorRole;

    #[test]
    fn test_projection_is_pure() {
        assert_eq!(StandardTheme::light(), StandardTheme::light());
        assert_eq!(StandardTheme::dark(), StandardTheme::dark());
        assert_eq!(StandardTheme::bundle(), StandardTheme::bundle());
    }

    #[test]
    fn test_brand_primary_uses_the_design_mapping() {
        assert_eq!(StandardTheme::light().brand.primary, TOKENS.primary.s600);
        assert_eq!(StandardTheme::dark().brand.primary, TOKENS.primary.s500);
    }

    #[test]
    fn test_dark_is_not_a_mechanical_inversion() {
        let light = StandardTheme::light();
        let dark = StandardTheme::dark();

        // The overlay computations differ in base shade and alpha
        assert_ne!(light.surface.overlay.a, dark.surface.overlay.a);

        // Interactive hover brightens in dark mode instead of darkening
        assert!(
            dark.interactive.hover.relative_luminance()
                > dark.brand.primary.relative_luminance()
        );
        assert!(
            light.interactive.hover.relative_luminance()
                < light.brand.primary.relative_luminance()
        );
    }

    #[test]
    fn test_variants_disagree_on_every_background_role() {
        let light = StandardTheme::light();
        let dark = StandardTheme::dark();
        for role in [
            ColorRole::BackgroundPrimary,
            ColorRole::BackgroundSecondary,
            ColorRole::BackgroundTertiary,
        ] {
            assert_ne!(light.color(role), dark.color(role), "{}", role.path());
        }
    }
}
