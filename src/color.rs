use std::str::FromStr;

use palette::{encoding, FromColor, Srgb};

use crate::error::{Error, Result};

type PaletteHsl = palette::Hsl<encoding::Srgb, f64>;

/// An 8-bit sRGB color, the form colors take on the wire and on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color like `89b4fa` or `#89B4FA`.
    ///
    /// Surrounding whitespace and one leading `#` are ignored; what is left
    /// must be exactly 6 hex digits.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::Format {
                input: hex.to_string(),
            });
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| Error::Format {
                input: hex.to_string(),
            })
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Serialize to 6 lowercase hex digits, no `#`.
    pub fn to_hex(self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Convert to `palette::Srgb<u8>`.
    pub fn to_srgb_u8(self) -> Srgb<u8> {
        Srgb::new(self.r, self.g, self.b)
    }

    /// Convert to unit-range HSL.
    pub fn to_hsl(self) -> Hsl {
        let rgb: Srgb<f64> = self.to_srgb_u8().into_format();
        let hsl = PaletteHsl::from_color(rgb);
        Hsl::new(
            hsl.hue.into_positive_degrees() / 360.0,
            hsl.saturation,
            hsl.lightness,
        )
    }

    /// Clamp an Srgb<f64> to [0, 1] and round each channel to the nearest byte.
    fn from_srgb_f64_clamped(srgb: Srgb<f64>) -> Self {
        let to_u8 = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self {
            r: to_u8(srgb.red),
            g: to_u8(srgb.green),
            b: to_u8(srgb.blue),
        }
    }

    /// WCAG 2.0 relative luminance.
    pub fn relative_luminance(self) -> f32 {
        fn linearize(c: u8) -> f32 {
            let c = c as f32 / 255.0;
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        0.2126 * linearize(self.r) + 0.7152 * linearize(self.g) + 0.0722 * linearize(self.b)
    }

    /// WCAG 2.0 contrast ratio between two colors, in [1, 21].
    pub fn contrast_ratio(c1: &Color, c2: &Color) -> f32 {
        let l1 = c1.relative_luminance();
        let l2 = c2.relative_luminance();
        let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
        (lighter + 0.05) / (darker + 0.05)
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A color in HSL with every component in unit range.
///
/// Hue is a fraction of a turn in `[0, 1)` and wraps; saturation and
/// lightness live in `[0, 1]` and clamp. Construction through [`Hsl::new`]
/// always normalizes, so a stored `Hsl` is never out of range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: wrap_unit(h),
            s: s.clamp(0.0, 1.0),
            l: l.clamp(0.0, 1.0),
        }
    }

    pub fn from_hex(hex: &str) -> Result<Self> {
        Color::from_hex(hex).map(Color::to_hsl)
    }

    /// Convert to 8-bit RGB, rounding each channel to the nearest integer.
    pub fn to_rgb(self) -> Color {
        let hsl = PaletteHsl::new(self.h * 360.0, self.s, self.l);
        let rgb: Srgb<f64> = Srgb::from_color(hsl);
        Color::from_srgb_f64_clamped(rgb)
    }

    pub fn to_hex(self) -> String {
        self.to_rgb().to_hex()
    }

    /// Hue in whole degrees, saturation and lightness in whole percent.
    pub fn to_display_units(self) -> (u16, u8, u8) {
        (
            ((self.h * 360.0).round() as u16) % 360,
            (self.s * 100.0).round() as u8,
            (self.l * 100.0).round() as u8,
        )
    }
}

/// Reduce `x` modulo 1 into `[0, 1)`.
pub(crate) fn wrap_unit(x: f64) -> f64 {
    let wrapped = x.rem_euclid(1.0);
    // rem_euclid rounds tiny negative inputs up to exactly 1.0
    if wrapped >= 1.0 {
        0.0
    } else {
        wrapped
    }
}
