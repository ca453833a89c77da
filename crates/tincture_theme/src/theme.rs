//! Semantic themes
//!
//! A semantic theme assigns UI meaning to raw token values: nine categories
//! (background, text, brand, surface, border, interactive, status,
//! navigation, accent), each a small set of named roles. Themes are built
//! once by the projector and never mutated; the active scheme is tracked by
//! [`ThemeContext`](crate::ThemeContext).

use crate::tokens::TokenStore;
use tincture_core::Color;

pub use tincture_core::ColorScheme;

/// Flat key for every semantic role, for dynamic access and projection
///
/// The dotted-path form (`"brand.primary"`) and the CSS custom-property name
/// (`--color-brand-primary`) both derive from [`ColorRole::parts`].
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorRole {
    // Page backgrounds
    BackgroundPrimary,
    BackgroundSecondary,
    BackgroundTertiary,

    // Text
    TextPrimary,
    TextSecondary,
    TextMuted,
    TextInverse,
    TextLink,

    // Brand
    BrandPrimary,
    BrandSecondary,
    BrandContrast,

    // Raised and recessed surfaces
    SurfacePrimary,
    SurfaceElevated,
    SurfaceOverlay,
    SurfaceSunken,

    // Borders
    BorderPrimary,
    BorderSecondary,
    BorderFocus,
    BorderError,

    // Interactive element states
    InteractiveHover,
    InteractiveActive,
    InteractiveFocus,
    InteractiveDisabled,

    // Status communication
    StatusSuccess,
    StatusSuccessSurface,
    StatusWarning,
    StatusWarningSurface,
    StatusError,
    StatusErrorSurface,
    StatusInfo,
    StatusInfoSurface,

    // Navigation chrome
    NavigationBackground,
    NavigationText,
    NavigationTextActive,
    NavigationBorder,

    // Accent
    AccentPrimary,
    AccentMuted,
    AccentEmphasis,
}

impl ColorRole {
    /// Every role, grouped by category
    pub const ALL: [ColorRole; 38] = [
        ColorRole::BackgroundPrimary,
        ColorRole::BackgroundSecondary,
        ColorRole::BackgroundTertiary,
        ColorRole::TextPrimary,
        ColorRole::TextSecondary,
        ColorRole::TextMuted,
        ColorRole::TextInverse,
        ColorRole::TextLink,
        ColorRole::BrandPrimary,
        ColorRole::BrandSecondary,
        ColorRole::BrandContrast,
        ColorRole::SurfacePrimary,
        ColorRole::SurfaceElevated,
        ColorRole::SurfaceOverlay,
        ColorRole::SurfaceSunken,
        ColorRole::BorderPrimary,
        ColorRole::BorderSecondary,
        ColorRole::BorderFocus,
        ColorRole::BorderError,
        ColorRole::InteractiveHover,
        ColorRole::InteractiveActive,
        ColorRole::InteractiveFocus,
        ColorRole::InteractiveDisabled,
        ColorRole::StatusSuccess,
        ColorRole::StatusSuccessSurface,
        ColorRole::StatusWarning,
        ColorRole::StatusWarningSurface,
        ColorRole::StatusError,
        ColorRole::StatusErrorSurface,
        ColorRole::StatusInfo,
        ColorRole::StatusInfoSurface,
        ColorRole::NavigationBackground,
        ColorRole::NavigationText,
        ColorRole::NavigationTextActive,
        ColorRole::NavigationBorder,
        ColorRole::AccentPrimary,
        ColorRole::AccentMuted,
        ColorRole::AccentEmphasis,
    ];

    /// Category and role name segments
    pub fn parts(self) -> (&'static str, &'static str) {
        match self {
            ColorRole::BackgroundPrimary => ("background", "primary"),
            ColorRole::BackgroundSecondary => ("background", "secondary"),
            ColorRole::BackgroundTertiary => ("background", "tertiary"),
            ColorRole::TextPrimary => ("text", "primary"),
            ColorRole::TextSecondary => ("text", "secondary"),
            ColorRole::TextMuted => ("text", "muted"),
            ColorRole::TextInverse => ("text", "inverse"),
            ColorRole::TextLink => ("text", "link"),
            ColorRole::BrandPrimary => ("brand", "primary"),
            ColorRole::BrandSecondary => ("brand", "secondary"),
            ColorRole::BrandContrast => ("brand", "contrast"),
            ColorRole::SurfacePrimary => ("surface", "primary"),
            ColorRole::SurfaceElevated => ("surface", "elevated"),
            ColorRole::SurfaceOverlay => ("surface", "overlay"),
            ColorRole::SurfaceSunken => ("surface", "sunken"),
            ColorRole::BorderPrimary => ("border", "primary"),
            ColorRole::BorderSecondary => ("border", "secondary"),
            ColorRole::BorderFocus => ("border", "focus"),
            ColorRole::BorderError => ("border", "error"),
            ColorRole::InteractiveHover => ("interactive", "hover"),
            ColorRole::InteractiveActive => ("interactive", "active"),
            ColorRole::InteractiveFocus => ("interactive", "focus"),
            ColorRole::InteractiveDisabled => ("interactive", "disabled"),
            ColorRole::StatusSuccess => ("status", "success"),
            ColorRole::StatusSuccessSurface => ("status", "success_surface"),
            ColorRole::StatusWarning => ("status", "warning"),
            ColorRole::StatusWarningSurface => ("status", "warning_surface"),
            ColorRole::StatusError => ("status", "error"),
            ColorRole::StatusErrorSurface => ("status", "error_surface"),
            ColorRole::StatusInfo => ("status", "info"),
            ColorRole::StatusInfoSurface => ("status", "info_surface"),
            ColorRole::NavigationBackground => ("navigation", "background"),
            ColorRole::NavigationText => ("navigation", "text"),
            ColorRole::NavigationTextActive => ("navigation", "text_active"),
            ColorRole::NavigationBorder => ("navigation", "border"),
            ColorRole::AccentPrimary => ("accent", "primary"),
            ColorRole::AccentMuted => ("accent", "muted"),
            ColorRole::AccentEmphasis => ("accent", "emphasis"),
        }
    }

    /// Dotted-path form, e.g. `"brand.primary"`
    pub fn path(self) -> String {
        let (category, role) = self.parts();
        format!("{category}.{role}")
    }

    /// Parse a dotted semantic path; `None` when the path names no role
    pub fn parse(path: &str) -> Option<ColorRole> {
        let (category, role) = path.split_once('.')?;
        ColorRole::ALL
            .into_iter()
            .find(|candidate| candidate.parts() == (category, role))
    }
}

/// Page background colors
#[derive(Clone, Debug, PartialEq)]
pub struct BackgroundColors {
    pub primary: Color,
    pub secondary: Color,
    pub tertiary: Color,
}

/// Text colors
#[derive(Clone, Debug, PartialEq)]
pub struct TextColors {
    pub primary: Color,
    pub secondary: Color,
    pub muted: Color,
    pub inverse: Color,
    pub link: Color,
}

/// Brand colors
#[derive(Clone, Debug, PartialEq)]
pub struct BrandColors {
    pub primary: Color,
    pub secondary: Color,
    /// Foreground for content placed on `primary`
    pub contrast: Color,
}

/// Surface colors, lowest to highest elevation
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceColors {
    pub primary: Color,
    pub elevated: Color,
    /// Translucent scrim behind modal content
    pub overlay: Color,
    pub sunken: Color,
}

/// Border colors
#[derive(Clone, Debug, PartialEq)]
pub struct BorderColors {
    pub primary: Color,
    pub secondary: Color,
    pub focus: Color,
    pub error: Color,
}

/// Interactive state colors for brand-colored controls
#[derive(Clone, Debug, PartialEq)]
pub struct InteractiveColors {
    pub hover: Color,
    pub active: Color,
    pub focus: Color,
    pub disabled: Color,
}

/// Status colors; each role pairs a foreground with a tinted surface
#[derive(Clone, Debug, PartialEq)]
pub struct StatusColors {
    pub success: Color,
    pub success_surface: Color,
    pub warning: Color,
    pub warning_surface: Color,
    pub error: Color,
    pub error_surface: Color,
    pub info: Color,
    pub info_surface: Color,
}

/// Navigation chrome colors
#[derive(Clone, Debug, PartialEq)]
pub struct NavigationColors {
    pub background: Color,
    pub text: Color,
    pub text_active: Color,
    pub border: Color,
}

/// Accent colors
#[derive(Clone, Debug, PartialEq)]
pub struct AccentColors {
    pub primary: Color,
    pub muted: Color,
    pub emphasis: Color,
}

/// One fully-resolved theme: every semantic role mapped to a token value
#[derive(Clone, Debug, PartialEq)]
pub struct SemanticTheme {
    pub scheme: ColorScheme,
    pub background: BackgroundColors,
    pub text: TextColors,
    pub brand: BrandColors,
    pub surface: SurfaceColors,
    pub border: BorderColors,
    pub interactive: InteractiveColors,
    pub status: StatusColors,
    pub navigation: NavigationColors,
    pub accent: AccentColors,
    /// Back-reference to the raw ramps this theme was drawn from
    pub tokens: &'static TokenStore,
}

impl SemanticTheme {
    /// Get a color by role key; total over [`ColorRole`]
    pub fn color(&self, role: ColorRole) -> Color {
        match role {
            ColorRole::BackgroundPrimary => self.background.primary,
            ColorRole::BackgroundSecondary => self.background.secondary,
            ColorRole::BackgroundTertiary => self.background.tertiary,
            ColorRole::TextPrimary => self.text.primary,
            ColorRole::TextSecondary => self.text.secondary,
            ColorRole::TextMuted => self.text.muted,
            ColorRole::TextInverse => self.text.inverse,
            ColorRole::TextLink => self.text.link,
            ColorRole::BrandPrimary => self.brand.primary,
            ColorRole::BrandSecondary => self.brand.secondary,
            ColorRole::BrandContrast => self.brand.contrast,
            ColorRole::SurfacePrimary => self.surface.primary,
            ColorRole::SurfaceElevated => self.surface.elevated,
            ColorRole::SurfaceOverlay => self.surface.overlay,
            ColorRole::SurfaceSunken => self.surface.sunken,
            ColorRole::BorderPrimary => self.border.primary,
            ColorRole::BorderSecondary => self.border.secondary,
            ColorRole::BorderFocus => self.border.focus,
            ColorRole::BorderError => self.border.error,
            ColorRole::InteractiveHover => self.interactive.hover,
            ColorRole::InteractiveActive => self.interactive.active,
            ColorRole::InteractiveFocus => self.interactive.focus,
            ColorRole::InteractiveDisabled => self.interactive.disabled,
            ColorRole::StatusSuccess => self.status.success,
            ColorRole::StatusSuccessSurface => self.status.success_surface,
            ColorRole::StatusWarning => self.status.warning,
            ColorRole::StatusWarningSurface => self.status.warning_surface,
            ColorRole::StatusError => self.status.error,
            ColorRole::StatusErrorSurface => self.status.error_surface,
            ColorRole::StatusInfo => self.status.info,
            ColorRole::StatusInfoSurface => self.status.info_surface,
            ColorRole::NavigationBackground => self.navigation.background,
            ColorRole::NavigationText => self.navigation.text,
            ColorRole::NavigationTextActive => self.navigation.text_active,
            ColorRole::NavigationBorder => self.navigation.border,
            ColorRole::AccentPrimary => self.accent.primary,
            ColorRole::AccentMuted => self.accent.muted,
            ColorRole::AccentEmphasis => self.accent.emphasis,
        }
    }
}

/// A named light/dark theme pair
#[derive(Clone, Debug, PartialEq)]
pub struct ThemeBundle {
    name: &'static str,
    light: SemanticTheme,
    dark: SemanticTheme,
}

impl ThemeBundle {
    pub fn new(name: &'static str, light: SemanticTheme, dark: SemanticTheme) -> Self {
        debug_assert_eq!(light.scheme, ColorScheme::Light);
        debug_assert_eq!(dark.scheme, ColorScheme::Dark);
        Self { name, light, dark }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The variant for a scheme
    pub fn for_scheme(&self, scheme: ColorScheme) -> &SemanticTheme {
        match scheme {
            ColorScheme::Light => &self.light,
            ColorScheme::Dark => &self.dark,
        }
    }

    pub fn light(&self) -> &SemanticTheme {
        &self.light
    }

    pub fn dark(&self) -> &SemanticTheme {
        &self.dark
    }
}
