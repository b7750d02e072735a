//! Color parsing and packing
//!
//! Hosts hand colors over as CSS-ish text. Two forms are understood:
//! `#rrggbb` and `rgb(r, g, b)`. Anything else falls back to opaque white.
//!
//! Packed pixels use ABGR (little-endian bytes [RR, GG, BB, AA]) so a pixel
//! buffer can be copied straight into an `ImageData` on the JS side.

use std::fmt;

use serde::{Serialize, Serializer};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255 };
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or `rgb(r,g,b)`; unparseable input becomes white.
    pub fn parse(text: &str) -> Self {
        Self::try_parse(text).unwrap_or(Self::WHITE)
    }

    pub fn try_parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if let Some(hex) = text.strip_prefix('#') {
            return parse_hex(hex);
        }
        let lower = text.to_ascii_lowercase();
        let inner = lower.strip_prefix("rgb(")?.strip_suffix(')')?;
        parse_rgb_triplet(inner)
    }

    /// Pack with the given alpha (0..=1) into ABGR.
    #[inline]
    pub fn to_abgr(self, alpha: f32) -> u32 {
        let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u32;
        (a << 24) | ((self.b as u32) << 16) | ((self.g as u32) << 8) | (self.r as u32)
    }

    /// `rgb(r,g,b)` form, what canvas `fillStyle` accepts.
    pub fn css(self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Color::rgb(channel(0)?, channel(2)?, channel(4)?))
}

fn parse_rgb_triplet(inner: &str) -> Option<Color> {
    let mut parts = inner.split(',').map(|p| p.trim().parse::<u8>());
    let r = parts.next()?.ok()?;
    let g = parts.next()?.ok()?;
    let b = parts.next()?.ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Color::rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_and_rgb_forms() {
        assert_eq!(Color::parse("#0a141e"), Color::rgb(10, 20, 30));
        assert_eq!(Color::parse("#FFaa00"), Color::rgb(255, 170, 0));
        assert_eq!(Color::parse("rgb(1, 2, 3)"), Color::rgb(1, 2, 3));
        assert_eq!(Color::parse("  RGB(255,0,128) "), Color::rgb(255, 0, 128));
    }

    #[test]
    fn garbage_falls_back_to_white() {
        for bad in ["", "#fff", "#gg0000", "rgb(1,2)", "rgb(1,2,3,4)", "rgb(300,0,0)", "blue"] {
            assert_eq!(Color::parse(bad), Color::WHITE, "input {bad:?}");
        }
    }

    #[test]
    fn abgr_packing_matches_canvas_byte_order() {
        let c = Color::rgb(0x11, 0x22, 0x33);
        assert_eq!(c.to_abgr(1.0), 0xFF33_2211);
        assert_eq!(c.to_abgr(0.0) >> 24, 0);
    }

    #[test]
    fn display_is_lowercase_hex() {
        assert_eq!(Color::rgb(255, 0, 16).to_string(), "#ff0010");
    }
}
