//! Color parsing

use crate::error::GumError;
use crossterm::style::{Color, ContentStyle};

/// Parse a color given on the command line
///
/// Accepts an ANSI-256 index (`"212"`), or a hex color (`"#ff87d7"`, `"#f8d"`).
/// An empty string means "no color".
pub fn parse_color(value: &str) -> Result<Option<Color>, GumError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }

    if let Some(hex) = value.strip_prefix('#') {
        return parse_hex(hex)
            .map(Some)
            .ok_or_else(|| GumError::invalid_argument(format!("invalid hex color '{value}'")));
    }

    value
        .parse::<u8>()
        .map(|index| Some(Color::AnsiValue(index)))
        .map_err(|_| {
            GumError::invalid_argument(format!(
                "invalid color '{value}': expected 0-255 or #RRGGBB"
            ))
        })
}

fn parse_hex(hex: &str) -> Option<Color> {
    let digits: Vec<u8> = hex
        .chars()
        .map(|c| c.to_digit(16).and_then(|d| u8::try_from(d).ok()))
        .collect::<Option<_>>()?;

    match *digits.as_slice() {
        [r, g, b] => Some(Color::Rgb {
            r: r * 17,
            g: g * 17,
            b: b * 17,
        }),
        [r1, r2, g1, g2, b1, b2] => Some(Color::Rgb {
            r: r1 * 16 + r2,
            g: g1 * 16 + g2,
            b: b1 * 16 + b2,
        }),
        _ => None,
    }
}

/// Apply `style` to `text`, skipping escape codes when the style is empty
#[must_use]
pub fn paint(style: &ContentStyle, text: &str) -> String {
    if style.foreground_color.is_none()
        && style.background_color.is_none()
        && style.attributes.is_empty()
    {
        return text.to_owned();
    }
    style.apply(text).to_string()
}
