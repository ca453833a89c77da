//! Shade-indexed color scales

use tincture_core::Color;

/// Shade steps of a color ramp, lightest to darkest
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub enum Shade {
    S50,
    S100,
    S200,
    S300,
    S400,
    S500,
    S600,
    S700,
    S800,
    S900,
    S950,
}

impl Shade {
    /// All shades in ramp order
    pub const ALL: [Shade; 11] = [
        Shade::S50,
        Shade::S100,
        Shade::S200,
        Shade::S300,
        Shade::S400,
        Shade::S500,
        Shade::S600,
        Shade::S700,
        Shade::S800,
        Shade::S900,
        Shade::S950,
    ];

    /// Numeric shade index (50, 100, ..., 950)
    pub const fn index(self) -> u16 {
        match self {
            Shade::S50 => 50,
            Shade::S100 => 100,
            Shade::S200 => 200,
            Shade::S300 => 300,
            Shade::S400 => 400,
            Shade::S500 => 500,
            Shade::S600 => 600,
            Shade::S700 => 700,
            Shade::S800 => 800,
            Shade::S900 => 900,
            Shade::S950 => 950,
        }
    }

    /// Shade for a numeric index; `None` for steps the ramps do not carry
    pub fn from_index(index: u16) -> Option<Shade> {
        Shade::ALL.into_iter().find(|shade| shade.index() == index)
    }
}

/// One color scale: a color per shade step
///
/// Invariant: relative luminance strictly decreases from `s50` to `s950`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorRamp {
    pub s50: Color,
    pub s100: Color,
    pub s200: Color,
    pub s300: Color,
    pub s400: Color,
    pub s500: Color,
    pub s600: Color,
    pub s700: Color,
    pub s800: Color,
    pub s900: Color,
    pub s950: Color,
}

impl ColorRamp {
    /// Get the color at a shade step
    pub const fn get(&self, shade: Shade) -> Color {
        match shade {
            Shade::S50 => self.s50,
            Shade::S100 => self.s100,
            Shade::S200 => self.s200,
            Shade::S300 => self.s300,
            Shade::S400 => self.s400,
            Shade::S500 => self.s500,
            Shade::S600 => self.s600,
            Shade::S700 => self.s700,
            Shade::S800 => self.s800,
            Shade::S900 => self.s900,
            Shade::S950 => self.s950,
        }
    }

    /// All entries in shade order
    pub fn entries(&self) -> [(Shade, Color); 11] {
        Shade::ALL.map(|shade| (shade, self.get(shade)))
    }
}
