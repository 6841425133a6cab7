//! Configuration enum types.

use crate::draw::Color;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - a named color, a hex string, or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// default_color = "red"
///
/// # Hex color
/// default_color = "#2b2b2b"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color (red, green, blue, yellow, orange, pink, white, black,
    /// charcoal) or a `#rrggbb` hex string
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the specification to an opaque [`Color`].
    ///
    /// Returns `None` for unknown names and malformed hex strings; callers keep
    /// their previous color in that case.
    pub fn to_color(&self) -> Option<Color> {
        match self {
            ColorSpec::Name(name) => {
                crate::util::name_to_color(name).or_else(|| Color::from_hex(name))
            }
            ColorSpec::Rgb([r, g, b]) => Some(Color::rgb(*r, *g, *b)),
        }
    }
}

impl From<&str> for ColorSpec {
    fn from(value: &str) -> Self {
        ColorSpec::Name(value.to_string())
    }
}

impl From<Color> for ColorSpec {
    fn from(color: Color) -> Self {
        ColorSpec::Rgb([color.r, color.g, color.b])
    }
}
