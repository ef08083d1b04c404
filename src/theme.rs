//! Background colour of the rendered proposal list.

use std::str::FromStr;

use crate::error::ColorError;

/// A CSS colour that is safe to place inside a `style` attribute.
///
/// Accepted forms: `#rgb`, `#rrggbb`, `#rrggbbaa`, or a bare CSS keyword such
/// as `lightyellow`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Background(String);

impl Background {
    pub fn as_css(&self) -> &str {
        &self.0
    }
}

impl FromStr for Background {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        let valid = if let Some(hex) = value.strip_prefix('#') {
            matches!(hex.len(), 3 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit())
        } else {
            !value.is_empty() && value.len() <= 32 && value.chars().all(|c| c.is_ascii_alphabetic())
        };
        if valid {
            Ok(Self(value.to_ascii_lowercase()))
        } else {
            Err(ColorError(s.to_string()))
        }
    }
}
