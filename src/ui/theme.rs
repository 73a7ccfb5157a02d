//! Colors and ANSI escape sequence generation.
//!
//! Row colors are 32-bit ARGB values, the form host components hand them
//! over in. They can be written as hex strings (`#RRGGBB`, `#AARRGGBB`,
//! `0xAARRGGBB`) or as plain integers. The terminal renderer turns them into
//! 24-bit ANSI escape sequences; alpha is ignored there.
//!
//! # Example
//!
//! ```rust
//! use listadapter::ui::theme::{Color, Theme};
//!
//! let color: Color = "#f5c2e7".parse().unwrap();
//! assert_eq!(color.rgb(), (0xf5, 0xc2, 0xe7));
//! print!("{}Highlighted{}", Theme::bg(color), Theme::reset());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A 32-bit ARGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ColorRepr", into = "String")]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Self = Self(0xFF00_0000);
    pub const WHITE: Self = Self(0xFFFF_FFFF);
    pub const LIGHT_GRAY: Self = Self(0xFFCC_CCCC);

    /// Opaque color from red, green and blue components.
    #[must_use]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(0xFF00_0000 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    #[must_use]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        ((self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8)
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let hex = s
            .strip_prefix('#')
            .or_else(|| s.strip_prefix("0x"))
            .or_else(|| s.strip_prefix("0X"));

        let Some(hex) = hex else {
            // Plain decimal, possibly negative as signed ARGB ints often are.
            return s
                .parse::<i64>()
                .ok()
                .and_then(|v| u32::try_from(v).ok().or_else(|| i32::try_from(v).ok().map(|v| v as u32)))
                .map(Self)
                .ok_or_else(|| format!("invalid color: {s}"));
        };

        let value = u32::from_str_radix(hex, 16).map_err(|e| format!("invalid color {s}: {e}"))?;
        match hex.len() {
            6 => Ok(Self(0xFF00_0000 | value)),
            8 => Ok(Self(value)),
            _ => Err(format!("invalid color {s}: expected 6 or 8 hex digits")),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ColorRepr {
    Int(i64),
    Text(String),
}

impl TryFrom<ColorRepr> for Color {
    type Error = String;

    fn try_from(repr: ColorRepr) -> Result<Self, Self::Error> {
        match repr {
            ColorRepr::Int(v) => v.to_string().parse(),
            ColorRepr::Text(s) => s.parse(),
        }
    }
}

/// ANSI escape sequence helpers.
#[derive(Debug, Clone, Copy)]
pub struct Theme;

impl Theme {
    /// 24-bit foreground color escape sequence.
    #[must_use]
    pub fn fg(color: Color) -> String {
        let (r, g, b) = color.rgb();
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// 24-bit background color escape sequence.
    #[must_use]
    pub fn bg(color: Color) -> String {
        let (r, g, b) = color.rgb();
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_digit_hex_is_opaque() {
        assert_eq!("#cdd6f4".parse::<Color>(), Ok(Color(0xFFCD_D6F4)));
    }

    #[test]
    fn eight_digit_hex_keeps_alpha() {
        let color: Color = "0x80112233".parse().unwrap();
        assert_eq!(color.alpha(), 0x80);
        assert_eq!(color.rgb(), (0x11, 0x22, 0x33));
    }

    #[test]
    fn signed_integers_wrap_to_argb() {
        // -16777216 is opaque black as a signed 32-bit ARGB int.
        assert_eq!("-16777216".parse::<Color>(), Ok(Color::BLACK));
        assert_eq!("4294967295".parse::<Color>(), Ok(Color::WHITE));
    }

    #[test]
    fn rejects_bad_input() {
        assert!("#12345".parse::<Color>().is_err());
        assert!("#zzzzzz".parse::<Color>().is_err());
        assert!("red".parse::<Color>().is_err());
    }

    #[test]
    fn ansi_sequences_use_rgb() {
        assert_eq!(Theme::fg(Color::from_rgb(1, 2, 3)), "\u{1b}[38;2;1;2;3m");
        assert_eq!(Theme::bg(Color::WHITE), "\u{1b}[48;2;255;255;255m");
    }

    #[test]
    fn display_round_trips() {
        let color = Color(0x12AB_CDEF);
        assert_eq!(color.to_string().parse::<Color>(), Ok(color));
    }
}
