//! 8-bit RGB color.

use std::fmt;

use super::{check_u8, Result};

/// Three 8-bit channels. Transparency lives on the objects, not here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from wide integers. Any channel outside `0..=255` is rejected.
    pub fn new(r: impl Into<i128>, g: impl Into<i128>, b: impl Into<i128>) -> Result<Self> {
        Ok(Self::rgb(
            check_u8("red", r)?,
            check_u8("green", g)?,
            check_u8("blue", b)?,
        ))
    }

    /// Convert hue (degrees), saturation and value (both `0..=1`) to RGB.
    ///
    /// Saturation and value are clamped to the unit range first, so the
    /// result is always representable.
    pub fn from_hsv(hue: f64, saturation: f64, value: f64) -> Self {
        let s = saturation.clamp(0.0, 1.0);
        let v = value.clamp(0.0, 1.0);
        let (r, g, b) = hue_rgb(hue, s);
        let channel = |c: f64| (c * v * 255.0).clamp(0.0, 255.0) as u8;
        Self::rgb(channel(r), channel(g), channel(b))
    }

    #[inline]
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

// Fully bright RGB for a hue sector, lifted toward white by `1 - s`.
fn hue_rgb(hue: f64, s: f64) -> (f64, f64, f64) {
    let h = hue.rem_euclid(360.0) / 60.0;
    let sector = h.trunc();
    let rising = h - sector;
    let falling = 1.0 - rising;
    let floor = 1.0 - s;
    let f = s * rising + floor;
    let g = s * falling + floor;
    match sector as u8 {
        0 => (1.0, f, floor),
        1 => (g, 1.0, floor),
        2 => (floor, 1.0, f),
        3 => (floor, g, 1.0),
        4 => (f, floor, 1.0),
        5 => (1.0, floor, g),
        _ => (1.0, 1.0, 1.0),
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::rgb(r, g, b)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}
