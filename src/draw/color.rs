//! RGBA color type and predefined color constants.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Represents an RGBA color with 8-bit channels.
///
/// # Examples
///
/// ```
/// use happy_little_pixels::draw::Color;
/// let red = Color::rgb(255, 0, 0);
/// assert_eq!(red.a, 255);
/// assert_eq!(Color::from_hex("#ff0000"), Some(red));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// Red component
    pub r: u8,
    /// Green component
    pub g: u8,
    /// Blue component
    pub b: u8,
    /// Alpha (0 = fully transparent, 255 = fully opaque)
    pub a: u8,
}

impl Color {
    /// Creates a new color from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parses a 24-bit `#rrggbb` (or bare `rrggbb`) string into an opaque color.
    ///
    /// Returns `None` for anything else, including short `#rgb` forms.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.trim().strip_prefix('#').unwrap_or(hex.trim());
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |range: Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
        Some(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Formats the RGB part as `#RRGGBB` (alpha is dropped).
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Returns the same color with alpha forced to 255.
    pub const fn opaque(self) -> Self {
        Self { a: 255, ..self }
    }

    /// Returns the channels in RGBA byte order.
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        TRANSPARENT
    }
}

// ============================================================================
// Predefined Color Constants
// ============================================================================

/// Default brush color of a fresh session (dark charcoal)
pub const CHARCOAL: Color = Color::rgb(0x2b, 0x2b, 0x2b);

/// Predefined red color
pub const RED: Color = Color::rgb(255, 0, 0);

/// Predefined green color
pub const GREEN: Color = Color::rgb(0, 255, 0);

/// Predefined blue color
pub const BLUE: Color = Color::rgb(0, 0, 255);

/// Predefined yellow color
pub const YELLOW: Color = Color::rgb(255, 255, 0);

/// Predefined orange color
pub const ORANGE: Color = Color::rgb(255, 128, 0);

/// Predefined pink/magenta color
pub const PINK: Color = Color::rgb(255, 0, 255);

/// Predefined white color
pub const WHITE: Color = Color::rgb(255, 255, 255);

/// Predefined black color
pub const BLACK: Color = Color::rgb(0, 0, 0);

/// Fully transparent color. Fresh buffers and erased pixels hold exactly this value.
pub const TRANSPARENT: Color = Color::new(0, 0, 0, 0);
