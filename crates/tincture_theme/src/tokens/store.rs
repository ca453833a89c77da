//! The token store: eight const-constructed color ramps
//!
//! Ramp values follow the web shade-scale convention (50 lightest, 950
//! darkest). The store is a single immutable `static`; semantic themes hold
//! a back-reference to it for raw-token access.

use super::ramp::{ColorRamp, Shade};
use tincture_core::Color;

/// Named palettes carried by the token store
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum Palette {
    Primary,
    Secondary,
    Neutral,
    Accent,
    Warning,
    Error,
    Success,
    Info,
}

impl Palette {
    /// All palettes, in store order
    pub const ALL: [Palette; 8] = [
        Palette::Primary,
        Palette::Secondary,
        Palette::Neutral,
        Palette::Accent,
        Palette::Warning,
        Palette::Error,
        Palette::Success,
        Palette::Info,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Palette::Primary => "primary",
            Palette::Secondary => "secondary",
            Palette::Neutral => "neutral",
            Palette::Accent => "accent",
            Palette::Warning => "warning",
            Palette::Error => "error",
            Palette::Success => "success",
            Palette::Info => "info",
        }
    }

    /// Parse a palette name; `None` for unknown names
    pub fn from_name(name: &str) -> Option<Palette> {
        Palette::ALL.into_iter().find(|p| p.name() == name)
    }
}

/// The complete set of raw color ramps
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TokenStore {
    pub primary: ColorRamp,
    pub secondary: ColorRamp,
    pub neutral: ColorRamp,
    pub accent: ColorRamp,
    pub warning: ColorRamp,
    pub error: ColorRamp,
    pub success: ColorRamp,
    pub info: ColorRamp,
}

impl TokenStore {
    /// Get a ramp by palette name
    pub const fn ramp(&self, palette: Palette) -> &ColorRamp {
        match palette {
            Palette::Primary => &self.primary,
            Palette::Secondary => &self.secondary,
            Palette::Neutral => &self.neutral,
            Palette::Accent => &self.accent,
            Palette::Warning => &self.warning,
            Palette::Error => &self.error,
            Palette::Success => &self.success,
            Palette::Info => &self.info,
        }
    }

    /// Get a single token value
    pub const fn get(&self, palette: Palette, shade: Shade) -> Color {
        self.ramp(palette).get(shade)
    }
}

/// The token store every theme in this engine draws from
pub static TOKENS: TokenStore = TokenStore {
    primary: ramps::PRIMARY,
    secondary: ramps::SECONDARY,
    neutral: ramps::NEUTRAL,
    accent: ramps::ACCENT,
    warning: ramps::WARNING,
    error: ramps::ERROR,
    success: ramps::SUCCESS,
    info: ramps::INFO,
};

/// Raw ramp constants
pub mod ramps {
    use super::{Color, ColorRamp};

    /// Brand blue
    pub const PRIMARY: ColorRamp = ColorRamp {
        s50: Color::rgb(239.0 / 255.0, 246.0 / 255.0, 255.0 / 255.0),
        s100: Color::rgb(219.0 / 255.0, 234.0 / 255.0, 254.0 / 255.0),
        s200: Color::rgb(191.0 / 255.0, 219.0 / 255.0, 254.0 / 255.0),
        s300: Color::rgb(147.0 / 255.0, 197.0 / 255.0, 253.0 / 255.0),
        s400: Color::rgb(96.0 / 255.0, 165.0 / 255.0, 250.0 / 255.0),
        s500: Color::rgb(59.0 / 255.0, 130.0 / 255.0, 246.0 / 255.0),
        s600: Color::rgb(37.0 / 255.0, 99.0 / 255.0, 235.0 / 255.0),
        s700: Color::rgb(29.0 / 255.0, 78.0 / 255.0, 216.0 / 255.0),
        s800: Color::rgb(30.0 / 255.0, 64.0 / 255.0, 175.0 / 255.0),
        s900: Color::rgb(30.0 / 255.0, 58.0 / 255.0, 138.0 / 255.0),
        s950: Color::rgb(23.0 / 255.0, 37.0 / 255.0, 84.0 / 255.0),
    };

    /// Supporting violet
    pub const SECONDARY: ColorRamp = ColorRamp {
        s50: Color::rgb(245.0 / 255.0, 243.0 / 255.0, 255.0 / 255.0),
        s100: Color::rgb(237.0 / 255.0, 233.0 / 255.0, 254.0 / 255.0),
        s200: Color::rgb(221.0 / 255.0, 214.0 / 255.0, 254.0 / 255.0),
        s300: Color::rgb(196.0 / 255.0, 181.0 / 255.0, 253.0 / 255.0),
        s400: Color::rgb(167.0 / 255.0, 139.0 / 255.0, 250.0 / 255.0),
        s500: Color::rgb(139.0 / 255.0, 92.0 / 255.0, 246.0 / 255.0),
        s600: Color::rgb(124.0 / 255.0, 58.0 / 255.0, 237.0 / 255.0),
        s700: Color::rgb(109.0 / 255.0, 40.0 / 255.0, 217.0 / 255.0),
        s800: Color::rgb(91.0 / 255.0, 33.0 / 255.0, 182.0 / 255.0),
        s900: Color::rgb(76.0 / 255.0, 29.0 / 255.0, 149.0 / 255.0),
        s950: Color::rgb(46.0 / 255.0, 16.0 / 255.0, 101.0 / 255.0),
    };

    /// Grays for surfaces, text, and borders
    pub const NEUTRAL: ColorRamp = ColorRamp {
        s50: Color::rgb(250.0 / 255.0, 250.0 / 255.0, 250.0 / 255.0),
        s100: Color::rgb(245.0 / 255.0, 245.0 / 255.0, 245.0 / 255.0),
        s200: Color::rgb(229.0 / 255.0, 229.0 / 255.0, 229.0 / 255.0),
        s300: Color::rgb(212.0 / 255.0, 212.0 / 255.0, 212.0 / 255.0),
        s400: Color::rgb(163.0 / 255.0, 163.0 / 255.0, 163.0 / 255.0),
        s500: Color::rgb(115.0 / 255.0, 115.0 / 255.0, 115.0 / 255.0),
        s600: Color::rgb(82.0 / 255.0, 82.0 / 255.0, 82.0 / 255.0),
        s700: Color::rgb(64.0 / 255.0, 64.0 / 255.0, 64.0 / 255.0),
        s800: Color::rgb(38.0 / 255.0, 38.0 / 255.0, 38.0 / 255.0),
        s900: Color::rgb(23.0 / 255.0, 23.0 / 255.0, 23.0 / 255.0),
        s950: Color::rgb(10.0 / 255.0, 10.0 / 255.0, 10.0 / 255.0),
    };

    /// Teal highlight
    pub const ACCENT: ColorRamp = ColorRamp {
        s50: Color::rgb(240.0 / 255.0, 253.0 / 255.0, 250.0 / 255.0),
        s100: Color::rgb(204.0 / 255.0, 251.0 / 255.0, 241.0 / 255.0),
        s200: Color::rgb(153.0 / 255.0, 246.0 / 255.0, 228.0 / 255.0),
        s300: Color::rgb(94.0 / 255.0, 234.0 / 255.0, 212.0 / 255.0),
        s400: Color::rgb(45.0 / 255.0, 212.0 / 255.0, 191.0 / 255.0),
        s500: Color::rgb(20.0 / 255.0, 184.0 / 255.0, 166.0 / 255.0),
        s600: Color::rgb(13.0 / 255.0, 148.0 / 255.0, 136.0 / 255.0),
        s700: Color::rgb(15.0 / 255.0, 118.0 / 255.0, 110.0 / 255.0),
        s800: Color::rgb(17.0 / 255.0, 94.0 / 255.0, 89.0 / 255.0),
        s900: Color::rgb(19.0 / 255.0, 78.0 / 255.0, 74.0 / 255.0),
        s950: Color::rgb(4.0 / 255.0, 47.0 / 255.0, 46.0 / 255.0),
    };

    /// Amber
    pub const WARNING: ColorRamp = ColorRamp {
        s50: Color::rgb(255.0 / 255.0, 251.0 / 255.0, 235.0 / 255.0),
        s100: Color::rgb(254.0 / 255.0, 243.0 / 255.0, 199.0 / 255.0),
        s200: Color::rgb(253.0 / 255.0, 230.0 / 255.0, 138.0 / 255.0),
        s300: Color::rgb(252.0 / 255.0, 211.0 / 255.0, 77.0 / 255.0),
        s400: Color::rgb(251.0 / 255.0, 191.0 / 255.0, 36.0 / 255.0),
        s500: Color::rgb(245.0 / 255.0, 158.0 / 255.0, 11.0 / 255.0),
        s600: Color::rgb(217.0 / 255.0, 119.0 / 255.0, 6.0 / 255.0),
        s700: Color::rgb(180.0 / 255.0, 83.0 / 255.0, 9.0 / 255.0),
        s800: Color::rgb(146.0 / 255.0, 64.0 / 255.0, 14.0 / 255.0),
        s900: Color::rgb(120.0 / 255.0, 53.0 / 255.0, 15.0 / 255.0),
        s950: Color::rgb(69.0 / 255.0, 26.0 / 255.0, 3.0 / 255.0),
    };

    /// Red
    pub const ERROR: ColorRamp = ColorRamp {
        s50: Color::rgb(254.0 / 255.0, 242.0 / 255.0, 242.0 / 255.0),
        s100: Color::rgb(254.0 / 255.0, 226.0 / 255.0, 226.0 / 255.0),
        s200: Color::rgb(254.0 / 255.0, 202.0 / 255.0, 202.0 / 255.0),
        s300: Color::rgb(252.0 / 255.0, 165.0 / 255.0, 165.0 / 255.0),
        s400: Color::rgb(248.0 / 255.0, 113.0 / 255.0, 113.0 / 255.0),
        s500: Color::rgb(239.0 / 255.0, 68.0 / 255.0, 68.0 / 255.0),
        s600: Color::rgb(220.0 / 255.0, 38.0 / 255.0, 38.0 / 255.0),
        s700: Color::rgb(185.0 / 255.0, 28.0 / 255.0, 28.0 / 255.0),
        s800: Color::rgb(153.0 / 255.0, 27.0 / 255.0, 27.0 / 255.0),
        s900: Color::rgb(127.0 / 255.0, 29.0 / 255.0, 29.0 / 255.0),
        s950: Color::rgb(69.0 / 255.0, 10.0 / 255.0, 10.0 / 255.0),
    };

    /// Green
    pub const SUCCESS: ColorRamp = ColorRamp {
        s50: Color::rgb(240.0 / 255.0, 253.0 / 255.0, 244.0 / 255.0),
        s100: Color::rgb(220.0 / 255.0, 252.0 / 255.0, 231.0 / 255.0),
        s200: Color::rgb(187.0 / 255.0, 247.0 / 255.0, 208.0 / 255.0),
        s300: Color::rgb(134.0 / 255.0, 239.0 / 255.0, 172.0 / 255.0),
        s400: Color::rgb(74.0 / 255.0, 222.0 / 255.0, 128.0 / 255.0),
        s500: Color::rgb(34.0 / 255.0, 197.0 / 255.0, 94.0 / 255.0),
        s600: Color::rgb(22.0 / 255.0, 163.0 / 255.0, 74.0 / 255.0),
        s700: Color::rgb(21.0 / 255.0, 128.0 / 255.0, 61.0 / 255.0),
        s800: Color::rgb(22.0 / 255.0, 101.0 / 255.0, 52.0 / 255.0),
        s900: Color::rgb(20.0 / 255.0, 83.0 / 255.0, 45.0 / 255.0),
        s950: Color::rgb(5.0 / 255.0, 46.0 / 255.0, 22.0 / 255.0),
    };

    /// Sky blue
    pub const INFO: ColorRamp = ColorRamp {
        s50: Color::rgb(240.0 / 255.0, 249.0 / 255.0, 255.0 / 255.0),
        s100: Color::rgb(224.0 / 255.0, 242.0 / 255.0, 254.0 / 255.0),
        s200: Color::rgb(186.0 / 255.0, 230.0 / 255.0, 253.0 / 255.0),
        s300: Color::rgb(125.0 / 255.0, 211.0 / 255.0, 252.0 / 255.0),
        s400: Color::rgb(56.0 / 255.0, 189.0 / 255.0, 248.0 / 255.0),
        s500: Color::rgb(14.0 / 255.0, 165.0 / 255.0, 233.0 / 255.0),
        s600: Color::rgb(2.0 / 255.0, 132.0 / 255.0, 199.0 / 255.0),
        s700: Color::rgb(3.0 / 255.0, 105.0 / 255.0, 161.0 / 255.0),
        s800: Color::rgb(7.0 / 255.0, 89.0 / 255.0, 133.0 / 255.0),
        s900: Color::rgb(12.0 / 255.0, 74.0 / 255.0, 110.0 / 255.0),
        s950: Color::rgb(8.0 / 255.0, 47.0 / 255.0, 73.0 / 255.0),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_ramp_strictly_darkens() {
        for palette in Palette::ALL {
            let entries = TOKENS.ramp(palette).entries();
            for pair in entries.windows(2) {
                let (lighter_shade, lighter) = pair[0];
                let (darker_shade, darker) = pair[1];
                assert!(
                    lighter.relative_luminance() > darker.relative_luminance(),
                    "{} ramp does not darken between {} and {}",
                    palette.name(),
                    lighter_shade.index(),
                    darker_shade.index(),
                );
            }
        }
    }

    #[test]
    fn test_palette_name_round_trips() {
        for palette in Palette::ALL {
            assert_eq!(Palette::from_name(palette.name()), Some(palette));
        }
        assert_eq!(Palette::from_name("magenta"), None);
    }

    #[test]
    fn test_store_lookup_matches_ramp_fields() {
        assert_eq!(
            TOKENS.get(Palette::Primary, Shade::S600),
            TOKENS.primary.s600
        );
        assert_eq!(
            TOKENS.get(Palette::Neutral, Shade::S50),
            TOKENS.neutral.s50
        );
    }
}
