//! RGBA colors for contour layers and overlays.

use serde::Deserialize;

use crate::error::IsolineError;

/// An 8-bit RGBA color.
///
/// Deserializes from a hex string (`"#RRGGBB"`, `"#RRGGBBAA"`), an array
/// (`[r, g, b]` or `[r, g, b, a]`) or a color name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "ColorSpec")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RAY_WHITE: Color = Color::rgb(245, 245, 245);
    pub const GREEN: Color = Color::rgb(0, 228, 48);
    pub const RED: Color = Color::rgb(230, 41, 55);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a `#RRGGBB` or `#RRGGBBAA` string.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();

        match hex.len() {
            6 => Some(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Some(Self::rgba(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => None,
        }
    }

    /// Look up a named color.
    pub fn named(name: &str) -> Option<Self> {
        let color = match name.to_lowercase().as_str() {
            "transparent" => Self::TRANSPARENT,
            "black" => Self::BLACK,
            "white" => Self::WHITE,
            "raywhite" | "ray_white" => Self::RAY_WHITE,
            "red" => Self::RED,
            "green" => Self::GREEN,
            "blue" => Self::rgb(0, 121, 241),
            "yellow" => Self::rgb(253, 249, 0),
            "orange" => Self::rgb(255, 161, 0),
            "purple" => Self::rgb(200, 122, 255),
            "gray" | "grey" => Self::rgb(130, 130, 130),
            _ => return None,
        };
        Some(color)
    }
}

/// Accepted serialized forms of a color.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum ColorSpec {
    Array(Vec<u8>),
    Text(String),
}

impl TryFrom<ColorSpec> for Color {
    type Error = IsolineError;

    fn try_from(spec: ColorSpec) -> Result<Self, Self::Error> {
        match spec {
            ColorSpec::Array(arr) => match arr.as_slice() {
                [r, g, b] => Ok(Color::rgb(*r, *g, *b)),
                [r, g, b, a] => Ok(Color::rgba(*r, *g, *b, *a)),
                _ => Err(IsolineError::invalid_config(format!(
                    "color array must have 3 or 4 components, got {}",
                    arr.len()
                ))),
            },
            ColorSpec::Text(text) if text.starts_with('#') => Color::from_hex(&text)
                .ok_or_else(|| IsolineError::invalid_config(format!("invalid hex color '{}'", text))),
            ColorSpec::Text(text) => Color::named(&text)
                .ok_or_else(|| IsolineError::invalid_config(format!("unknown color name '{}'", text))),
        }
    }
}
