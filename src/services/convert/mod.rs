//! Color space conversion between HSL and RGB/hex.
//!
//! HSL to RGB is the display direction (hex and `rgb()` strings); RGB to
//! HSL is used only by the parser when normalizing hex and `rgb()` input
//! into the canonical model.

use crate::models::color::Hsl;
use crate::utils::numeric::round_channel;

/// Piecewise hue-to-channel helper for HSL -> RGB.
fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let mut t = t;
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Convert to integer RGB channels in [0, 255].
pub fn hsl_to_channels(color: &Hsl) -> (u8, u8, u8) {
    let h = color.hue / 360.0;
    let s = color.saturation / 100.0;
    let l = color.lightness / 100.0;

    if s == 0.0 {
        // Achromatic: every channel carries the lightness
        let gray = round_channel(l);
        return (gray, gray, gray);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    (
        round_channel(hue_to_rgb(p, q, h + 1.0 / 3.0)),
        round_channel(hue_to_rgb(p, q, h)),
        round_channel(hue_to_rgb(p, q, h - 1.0 / 3.0)),
    )
}

/// Format as a 7-character lowercase hex string, e.g. `"#3b82f6"`.
pub fn hsl_to_hex(color: &Hsl) -> String {
    let (r, g, b) = hsl_to_channels(color);
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Format as an `rgb(r, g, b)` string with integer channels.
pub fn hsl_to_rgb_string(color: &Hsl) -> String {
    let (r, g, b) = hsl_to_channels(color);
    format!("rgb({r}, {g}, {b})")
}

/// Normalize integer RGB channels into the canonical HSL model.
pub(crate) fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let r = f64::from(r) / 255.0;
    let g = f64::from(g) / 255.0;
    let b = f64::from(b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let lightness = (max + min) / 2.0;

    if max == min {
        // Achromatic
        return Hsl::new(0.0, 0.0, lightness * 100.0);
    }

    let delta = max - min;
    let saturation = if lightness > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    let hue = if max == r {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    Hsl::new(hue * 60.0, saturation * 100.0, lightness * 100.0)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_hex_white_and_black() {
        assert_eq!(hsl_to_hex(&Hsl::new(0.0, 0.0, 100.0)), "#ffffff");
        assert_eq!(hsl_to_hex(&Hsl::new(0.0, 0.0, 0.0)), "#000000");
    }

    #[test]
    fn test_hex_primaries() {
        assert_eq!(hsl_to_hex(&Hsl::new(0.0, 100.0, 50.0)), "#ff0000");
        assert_eq!(hsl_to_hex(&Hsl::new(240.0, 100.0, 50.0)), "#0000ff");
    }

    #[test]
    fn test_hex_css_green() {
        // hsl(120, 100%, 25%) is the CSS named color "green"
        assert_eq!(hsl_to_hex(&Hsl::new(120.0, 100.0, 25.0)), "#008000");
    }

    #[test]
    fn test_rgb_string_format() {
        assert_eq!(hsl_to_rgb_string(&Hsl::new(0.0, 0.0, 100.0)), "rgb(255, 255, 255)");
        assert_eq!(hsl_to_rgb_string(&Hsl::new(0.0, 100.0, 50.0)), "rgb(255, 0, 0)");
    }

    #[test]
    fn test_achromatic_channels_are_equal() {
        let (r, g, b) = hsl_to_channels(&Hsl::new(0.0, 0.0, 46.3));
        assert_eq!(r, g);
        assert_eq!(g, b);
        assert_eq!(r, 118);
    }

    #[test]
    fn test_rgb_to_hsl_primaries() {
        assert_eq!(rgb_to_hsl(255, 0, 0), Hsl::new(0.0, 100.0, 50.0));
        assert_eq!(rgb_to_hsl(0, 0, 255), Hsl::new(240.0, 100.0, 50.0));
    }

    #[test]
    fn test_rgb_to_hsl_gray_is_achromatic() {
        let gray = rgb_to_hsl(118, 118, 118);
        assert_eq!(gray.hue, 0.0);
        assert_eq!(gray.saturation, 0.0);
        assert!((gray.lightness - 46.27).abs() < 0.1);
    }

    #[test]
    fn test_round_trip_through_channels() {
        // Converting to channels and back must land on the same color
        for (r, g, b) in [(255u8, 0u8, 0u8), (0, 128, 0), (59, 130, 246), (118, 118, 118)] {
            let color = rgb_to_hsl(r, g, b);
            assert_eq!(hsl_to_channels(&color), (r, g, b));
        }
    }
}
