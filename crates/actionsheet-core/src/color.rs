//! Color strings for the cancel row.
//!
//! Accepts `#RRGGBB`, `#AARRGGBB`, and a fixed set of case-insensitive
//! color names.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// An ARGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Alpha channel.
    pub alpha: u8,
    /// Red channel.
    pub red: u8,
    /// Green channel.
    pub green: u8,
    /// Blue channel.
    pub blue: u8,
}

/// Reasons a color string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(clippy::module_name_repetitions)]
pub enum ColorParseError {
    /// The string was empty.
    #[error("color string is empty")]
    Empty,
    /// `#` followed by something that is not 6 or 8 hex digits.
    #[error("invalid hex color: {0}")]
    InvalidHex(String),
    /// Not a hex color and not a known name.
    #[error("unknown color name: {0}")]
    UnknownName(String),
}

/// Named colors, all fully opaque.
const NAMED_COLORS: &[(&str, u32)] = &[
    ("black", 0x00_0000),
    ("darkgray", 0x44_4444),
    ("darkgrey", 0x44_4444),
    ("gray", 0x88_8888),
    ("grey", 0x88_8888),
    ("lightgray", 0xCC_CCCC),
    ("lightgrey", 0xCC_CCCC),
    ("white", 0xFF_FFFF),
    ("red", 0xFF_0000),
    ("green", 0x00_FF00),
    ("blue", 0x00_00FF),
    ("yellow", 0xFF_FF00),
    ("cyan", 0x00_FFFF),
    ("magenta", 0xFF_00FF),
    ("aqua", 0x00_FFFF),
    ("fuchsia", 0xFF_00FF),
    ("lime", 0x00_FF00),
    ("maroon", 0x80_0000),
    ("navy", 0x00_0080),
    ("olive", 0x80_8000),
    ("purple", 0x80_0080),
    ("silver", 0xC0_C0C0),
    ("teal", 0x00_8080),
];

impl Color {
    /// Cancel-row color used when the tint is missing or unparseable (`#222222`).
    pub const DEFAULT_CANCEL: Self = Self::rgb(0x22, 0x22, 0x22);

    /// Creates an opaque color.
    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self {
            alpha: 0xFF,
            red,
            green,
            blue,
        }
    }

    /// Creates a color from a packed `0xAARRGGBB` value.
    #[must_use]
    pub const fn from_argb(argb: u32) -> Self {
        let [alpha, red, green, blue] = argb.to_be_bytes();
        Self {
            alpha,
            red,
            green,
            blue,
        }
    }

    /// Parses a color string.
    ///
    /// # Errors
    ///
    /// Returns [`ColorParseError`] if the string is empty, a malformed hex
    /// literal, or an unknown name.
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        if input.is_empty() {
            return Err(ColorParseError::Empty);
        }

        if let Some(hex) = input.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ColorParseError::InvalidHex(String::from(input)));
        }

        let lower = input.to_ascii_lowercase();
        NAMED_COLORS
            .iter()
            .find(|(name, _)| *name == lower)
            .map(|&(_, rgb)| Self::from_argb(0xFF00_0000 | rgb))
            .ok_or_else(|| ColorParseError::UnknownName(String::from(input)))
    }

    /// Parses `input` if present, falling back to `fallback` when it is
    /// missing or invalid.
    #[must_use]
    pub fn resolve_or(input: Option<&str>, fallback: Self) -> Self {
        let Some(raw) = input else {
            return fallback;
        };
        match Self::parse(raw) {
            Ok(color) => color,
            Err(e) => {
                tracing::debug!(error = %e, "Tint color rejected, using fallback");
                fallback
            }
        }
    }
}

/// Parses the digits after `#`. Six digits imply full opacity.
fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let value = u32::from_str_radix(hex, 16).ok()?;
    match hex.len() {
        6 => Some(Color::from_argb(0xFF00_0000 | value)),
        8 => Some(Color::from_argb(value)),
        _ => None,
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.alpha == 0xFF {
            write!(f, "#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
        } else {
            write!(
                f,
                "#{:02X}{:02X}{:02X}{:02X}",
                self.alpha, self.red, self.green, self.blue
            )
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_parse_rgb_hex() {
        // Arrange & Act
        let color = Color::parse("#FF8800").unwrap();

        // Assert
        assert_eq!(color, Color::rgb(0xFF, 0x88, 0x00));
    }

    #[test]
    fn test_parse_argb_hex() {
        // Arrange & Act
        let color = Color::parse("#80112233").unwrap();

        // Assert
        assert_eq!(color.alpha, 0x80);
        assert_eq!(color.red, 0x11);
        assert_eq!(color.green, 0x22);
        assert_eq!(color.blue, 0x33);
    }

    #[test]
    fn test_parse_lowercase_hex() {
        // Arrange & Act
        let color = Color::parse("#00ff7f").unwrap();

        // Assert
        assert_eq!(color, Color::rgb(0x00, 0xFF, 0x7F));
    }

    #[test]
    fn test_parse_named_case_insensitive() {
        // Arrange & Act & Assert
        assert_eq!(Color::parse("Teal").unwrap(), Color::rgb(0x00, 0x80, 0x80));
        assert_eq!(Color::parse("RED").unwrap(), Color::rgb(0xFF, 0x00, 0x00));
        assert_eq!(
            Color::parse("grey").unwrap(),
            Color::parse("gray").unwrap()
        );
    }

    #[test]
    fn test_parse_rejects_short_hex() {
        // Arrange & Act
        let result = Color::parse("#FFF");

        // Assert
        assert_eq!(result, Err(ColorParseError::InvalidHex(String::from("#FFF"))));
    }

    #[test]
    fn test_parse_rejects_sign_in_hex() {
        // Arrange & Act & Assert
        assert!(Color::parse("#+12345").is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_name() {
        // Arrange & Act
        let result = Color::parse("not-a-color");

        // Assert
        assert!(matches!(result, Err(ColorParseError::UnknownName(_))));
    }

    #[test]
    fn test_parse_rejects_empty() {
        // Arrange & Act & Assert
        assert_eq!(Color::parse(""), Err(ColorParseError::Empty));
    }

    #[test]
    fn test_resolve_or_falls_back() {
        // Arrange & Act & Assert
        assert_eq!(
            Color::resolve_or(Some("not-a-color"), Color::DEFAULT_CANCEL),
            Color::DEFAULT_CANCEL
        );
        assert_eq!(
            Color::resolve_or(None, Color::DEFAULT_CANCEL),
            Color::DEFAULT_CANCEL
        );
        assert_eq!(
            Color::resolve_or(Some("#0000FF"), Color::DEFAULT_CANCEL),
            Color::rgb(0, 0, 0xFF)
        );
    }

    #[test]
    fn test_display() {
        // Arrange & Act & Assert
        assert_eq!(Color::DEFAULT_CANCEL.to_string(), "#222222");
        assert_eq!(Color::from_argb(0x8011_2233).to_string(), "#80112233");
    }
}
