//! Colors for grid overlays.
//!
//! Colors carry an alpha channel because every overlay the grid draws
//! itself (row separators, hover highlight, downed strike-through) is
//! translucent. They serialize as CSS strings so palettes can live in JSON
//! table descriptions and go straight to Canvas 2D.

use serde::{Deserialize, Serialize};

/// RGBA color: u8 channels, alpha in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const WHITE: Self = Self::rgba(255, 255, 255, 1.0);
    pub const BLACK: Self = Self::rgba(0, 0, 0, 1.0);
    pub const RED: Self = Self::rgba(255, 0, 0, 1.0);

    /// Create a color from channels and alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a different alpha.
    #[must_use]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Whether the color is fully opaque.
    pub fn is_opaque(self) -> bool {
        self.a >= 1.0
    }

    /// Convert to a CSS color string usable by Canvas 2D.
    ///
    /// Opaque colors use `#RRGGBB`, translucent ones `rgba(r, g, b, a)`.
    pub fn to_css(self) -> String {
        if self.is_opaque() {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }

    /// Parse `#RRGGBB`, `#RRGGBBAA`, `rgb(r, g, b)` or `rgba(r, g, b, a)`.
    /// Returns None if the format is invalid.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            parse_hex(hex)
        } else if s.starts_with("rgba(") {
            parse_rgba_string(s)
        } else if s.starts_with("rgb(") {
            parse_rgb_string(s)
        } else {
            None
        }
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(hex.get(range)?, 16).ok();
    match hex.len() {
        6 => Some(Color::rgba(channel(0..2)?, channel(2..4)?, channel(4..6)?, 1.0)),
        8 => {
            let a = channel(6..8)?;
            Some(Color::rgba(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                f32::from(a) / 255.0,
            ))
        }
        _ => None,
    }
}

fn parse_rgb_string(s: &str) -> Option<Color> {
    let inner = s.strip_prefix("rgb(")?.strip_suffix(')')?;
    let mut parts = inner.split(',').map(str::trim);
    let r: u8 = parts.next()?.parse().ok()?;
    let g: u8 = parts.next()?.parse().ok()?;
    let b: u8 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Color::rgba(r, g, b, 1.0))
}

fn parse_rgba_string(s: &str) -> Option<Color> {
    let inner = s.strip_prefix("rgba(")?.strip_suffix(')')?;
    let mut parts = inner.split(',').map(str::trim);
    let r: u8 = parts.next()?.parse().ok()?;
    let g: u8 = parts.next()?.parse().ok()?;
    let b: u8 = parts.next()?.parse().ok()?;
    let a: f32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() || !(0.0..=1.0).contains(&a) {
        return None;
    }
    Some(Color::rgba(r, g, b, a))
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(s: String) -> std::result::Result<Self, Self::Error> {
        Self::parse(&s).ok_or_else(|| format!("invalid color: {s}"))
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_css()
    }
}

/// Overlay colors used by the grid and the canvas surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridPalette {
    /// Faint line at the top edge of every drawn row
    pub separator: Color,
    /// Hover highlight fill
    pub highlight: Color,
    /// Strike-through for downed rows
    pub downed: Color,
    /// Label text color
    pub text: Color,
    /// Background behind the grid
    pub background: Color,
}

impl Default for GridPalette {
    fn default() -> Self {
        Self {
            separator: Color::WHITE.with_alpha(0.2),
            highlight: Color::WHITE.with_alpha(0.1),
            downed: Color::RED.with_alpha(0.5),
            text: Color::rgba(0xDD, 0xDD, 0xDD, 1.0),
            background: Color::rgba(0x1E, 0x1E, 0x1E, 1.0),
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_6() {
        let color = Color::parse("#FF8040").unwrap();
        assert_eq!(color, Color::rgba(255, 128, 64, 1.0));
        assert_eq!(color.to_css(), "#FF8040");
    }

    #[test]
    fn test_parse_hex_8_alpha_last() {
        let color = Color::parse("#FF000080").unwrap();
        assert_eq!((color.r, color.g, color.b), (255, 0, 0));
        assert!((color.a - 0.5).abs() < 0.01);
    }

    #[test]
    fn test_translucent_css() {
        let css = Color::WHITE.with_alpha(0.2).to_css();
        assert_eq!(css, "rgba(255, 255, 255, 0.2)");
    }

    #[test]
    fn test_parse_rgba() {
        let color = Color::parse("rgba(255, 0, 0, 0.5)").unwrap();
        assert_eq!(color, Color::RED.with_alpha(0.5));
        assert!(Color::parse("rgba(255, 0, 0, 1.5)").is_none());
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(Color::parse("red").is_none());
        assert!(Color::parse("#12345").is_none());
        assert!(Color::parse("rgb(1, 2)").is_none());
    }

    #[test]
    fn test_palette_json_round_trip_uses_css_strings() {
        let json = serde_json::to_string(&GridPalette::default()).unwrap();
        assert!(json.contains("\"downed\":\"rgba(255, 0, 0, 0.5)\""));
        let back: GridPalette = serde_json::from_str(&json).unwrap();
        assert_eq!(back, GridPalette::default());
    }

    #[test]
    fn test_partial_palette_keeps_defaults() {
        let p: GridPalette = serde_json::from_str(r##"{"separator": "#333333"}"##).unwrap();
        assert_eq!(p.separator, Color::rgba(0x33, 0x33, 0x33, 1.0));
        assert_eq!(p.downed, GridPalette::default().downed);
    }
}
