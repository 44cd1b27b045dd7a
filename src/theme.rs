//! Color theme for the canvas, markers and button
//!
//! Colors are written as `#RRGGBB` or `#RRGGBBAA` in `config.yaml`:
//!
//! ```yaml
//! theme:
//!   marker: "#0050FF"
//!   grid_line: "#333333"
//! ```

use serde::Deserialize;

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Convert to ARGB u32 for softbuffer
    pub fn to_argb_u32(&self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA" hex string
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let s = s.trim_start_matches('#');
        let channel = |range: std::ops::Range<usize>| {
            s.get(range)
                .ok_or_else(|| format!("Invalid hex color: #{}", s))
                .and_then(|h| u8::from_str_radix(h, 16).map_err(|e| e.to_string()))
        };
        match s.len() {
            6 => Ok(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Color {
                r: channel(0..2)?,
                g: channel(2..4)?,
                b: channel(4..6)?,
                a: channel(6..8)?,
            }),
            _ => Err(format!("Invalid hex color length: #{}", s)),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_hex(&value)
    }
}

/// Colors used to paint the window and the exported image
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub background: Color,
    pub grid_line: Color,
    pub marker: Color,
    pub label: Color,
    pub button_background: Color,
    pub button_hover: Color,
    pub button_pressed: Color,
    pub button_border: Color,
    pub button_foreground: Color,
    pub status_foreground: Color,
    pub status_error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::rgb(0xFF, 0xFF, 0xFF),
            grid_line: Color::rgb(0x00, 0x00, 0x00),
            marker: Color::rgb(0xFF, 0x00, 0x00),
            label: Color::rgb(0x00, 0x00, 0x00),
            button_background: Color::rgb(0xE8, 0xE8, 0xE8),
            button_hover: Color::rgb(0xD8, 0xD8, 0xD8),
            button_pressed: Color::rgb(0xC0, 0xC0, 0xC0),
            button_border: Color::rgb(0x80, 0x80, 0x80),
            button_foreground: Color::rgb(0x00, 0x00, 0x00),
            status_foreground: Color::rgb(0x30, 0x30, 0x30),
            status_error: Color::rgb(0xB0, 0x00, 0x20),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_hex() {
        assert_eq!(Color::from_hex("#FF0000").unwrap(), Color::rgb(255, 0, 0));
        assert_eq!(
            Color::from_hex("#00FF0080").unwrap(),
            Color {
                r: 0,
                g: 255,
                b: 0,
                a: 0x80
            }
        );
        assert!(Color::from_hex("#FFF").is_err());
        assert!(Color::from_hex("#GG0000").is_err());
    }

    #[test]
    fn test_to_argb() {
        assert_eq!(Color::rgb(0xFF, 0, 0).to_argb_u32(), 0xFFFF0000);
    }

    #[test]
    fn test_partial_theme_yaml_keeps_defaults() {
        let theme: Theme = serde_yaml::from_str("marker: \"#0050FF\"").unwrap();
        assert_eq!(theme.marker, Color::rgb(0x00, 0x50, 0xFF));
        assert_eq!(theme.background, Theme::default().background);
    }

    #[test]
    fn test_invalid_color_in_yaml_is_rejected() {
        let result: Result<Theme, _> = serde_yaml::from_str("marker: \"red\"");
        assert!(result.is_err());
    }
}
