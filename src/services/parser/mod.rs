//! Color input parsing.
//!
//! Normalizes the accepted textual forms into the canonical HSL model:
//! `#RGB`/`#RRGGBB` hex, functional `rgb(r, g, b)` and `hsl(h, s%, l%)`,
//! and the bare `"H S% L%"` triple used as the stored wire form.
//! Anything else is rejected with a typed error; [`parse`] flattens that
//! to `None` because callers treat unparseable input as "no preview",
//! never as a fault.

use std::str::FromStr;

use thiserror::Error;

use crate::models::color::Hsl;
use crate::services::convert::rgb_to_hsl;

/// Why a color string failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseColorError {
    #[error("empty color string")]
    Empty,
    #[error("invalid hex color (expected #RGB or #RRGGBB)")]
    InvalidHex,
    #[error("invalid rgb() color (expected rgb(r, g, b))")]
    InvalidRgb,
    #[error("invalid hsl() color (expected hsl(h, s%, l%))")]
    InvalidHsl,
    #[error("unrecognized color format")]
    Unrecognized,
}

/// Parse any accepted form, treating failures as "no color".
pub fn parse(input: &str) -> Option<Hsl> {
    input.parse().ok()
}

impl FromStr for Hsl {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseColorError::Empty);
        }

        if let Some(digits) = trimmed.strip_prefix('#') {
            return parse_hex(digits);
        }

        let lower = trimmed.to_ascii_lowercase();
        if let Some(args) = lower.strip_prefix("rgb(").and_then(|rest| rest.strip_suffix(')')) {
            return parse_rgb_args(args);
        }
        if let Some(args) = lower.strip_prefix("hsl(").and_then(|rest| rest.strip_suffix(')')) {
            return parse_hsl_args(args);
        }

        parse_bare_triple(trimmed)
    }
}

fn parse_hex(digits: &str) -> Result<Hsl, ParseColorError> {
    let nibble = |c: u8| -> Option<u8> {
        match c {
            b'0'..=b'9' => Some(c - b'0'),
            b'a'..=b'f' => Some(c - b'a' + 10),
            b'A'..=b'F' => Some(c - b'A' + 10),
            _ => None,
        }
    };

    let bytes = digits.as_bytes();
    let (r, g, b) = match bytes.len() {
        3 => {
            // #RGB shorthand: each digit expands to a pair, f -> ff
            let r = nibble(bytes[0]).ok_or(ParseColorError::InvalidHex)?;
            let g = nibble(bytes[1]).ok_or(ParseColorError::InvalidHex)?;
            let b = nibble(bytes[2]).ok_or(ParseColorError::InvalidHex)?;
            (r * 17, g * 17, b * 17)
        }
        6 => {
            let pair = |hi: u8, lo: u8| -> Result<u8, ParseColorError> {
                let hi = nibble(hi).ok_or(ParseColorError::InvalidHex)?;
                let lo = nibble(lo).ok_or(ParseColorError::InvalidHex)?;
                Ok(hi << 4 | lo)
            };
            (
                pair(bytes[0], bytes[1])?,
                pair(bytes[2], bytes[3])?,
                pair(bytes[4], bytes[5])?,
            )
        }
        _ => return Err(ParseColorError::InvalidHex),
    };

    Ok(rgb_to_hsl(r, g, b))
}

fn parse_rgb_args(args: &str) -> Result<Hsl, ParseColorError> {
    let channels: Vec<&str> = args.split(',').map(str::trim).collect();
    if channels.len() != 3 {
        return Err(ParseColorError::InvalidRgb);
    }

    let mut parsed = [0u8; 3];
    for (slot, raw) in parsed.iter_mut().zip(&channels) {
        let value: i64 = raw.parse().map_err(|_| ParseColorError::InvalidRgb)?;
        // Out-of-range channels are clamped, not rejected
        *slot = value.clamp(0, 255) as u8;
    }

    Ok(rgb_to_hsl(parsed[0], parsed[1], parsed[2]))
}

fn parse_hsl_args(args: &str) -> Result<Hsl, ParseColorError> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(ParseColorError::InvalidHsl);
    }

    let hue = parse_component(parts[0]).ok_or(ParseColorError::InvalidHsl)?;
    let saturation = parse_component(parts[1]).ok_or(ParseColorError::InvalidHsl)?;
    let lightness = parse_component(parts[2]).ok_or(ParseColorError::InvalidHsl)?;

    Ok(Hsl::new(hue, saturation, lightness))
}

fn parse_bare_triple(input: &str) -> Result<Hsl, ParseColorError> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    if parts.len() != 3 {
        return Err(ParseColorError::Unrecognized);
    }

    let hue = parse_component(parts[0]).ok_or(ParseColorError::Unrecognized)?;
    let saturation = parse_component(parts[1]).ok_or(ParseColorError::Unrecognized)?;
    let lightness = parse_component(parts[2]).ok_or(ParseColorError::Unrecognized)?;

    Ok(Hsl::new(hue, saturation, lightness))
}

/// Parse one numeric component, tolerating a trailing percent sign.
/// Out-of-range values are left for the model to wrap/clamp.
fn parse_component(raw: &str) -> Option<f64> {
    let digits = raw.strip_suffix('%').unwrap_or(raw).trim();
    digits.parse::<f64>().ok().filter(|value| value.is_finite())
}
