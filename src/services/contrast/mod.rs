//! WCAG-2 relative luminance and contrast ratio.
//!
//! The single formula every higher-level policy (classification,
//! auto-fix) is built on.

use crate::models::color::Hsl;
use crate::services::convert::hsl_to_channels;

/// Expand one gamma-compressed sRGB channel, normalized to [0, 1], into
/// linear light.
fn linearize(channel: f64) -> f64 {
    if channel <= 0.03928 {
        channel / 12.92
    } else {
        ((channel + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance per WCAG 2, in [0, 1].
pub fn relative_luminance(color: &Hsl) -> f64 {
    let (r, g, b) = hsl_to_channels(color);
    let r = linearize(f64::from(r) / 255.0);
    let g = linearize(f64::from(g) / 255.0);
    let b = linearize(f64::from(b) / 255.0);
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// Contrast ratio between two colors, always >= 1.
///
/// `(L_lighter + 0.05) / (L_darker + 0.05)`, symmetric in its arguments.
pub fn contrast_ratio(a: &Hsl, b: &Hsl) -> f64 {
    let luminance_a = relative_luminance(a);
    let luminance_b = relative_luminance(b);
    let (lighter, darker) = if luminance_a >= luminance_b {
        (luminance_a, luminance_b)
    } else {
        (luminance_b, luminance_a)
    };
    (lighter + 0.05) / (darker + 0.05)
}
