//! String-facing surface of the engine.
//!
//! Callers (form handlers, live swatch previews) hold colors in their
//! stored string forms; these wrappers parse once into the canonical
//! model, compute, and re-serialize. Unparseable input yields `None` so
//! a UI can skip its preview instead of failing.

use crate::models::color::Hsl;
use crate::models::compliance::{CompanionHint, ComplianceBadge, ContrastReport, Standard};
use crate::services::{autofix, compliance, contrast, convert, parser};

/// Parse any accepted textual form into the canonical model.
pub fn parse_color_to_hsl(input: &str) -> Option<Hsl> {
    parser::parse(input)
}

/// Contrast ratio between two textual colors.
pub fn get_contrast_ratio(color_a: &str, color_b: &str) -> Option<f64> {
    let a = parser::parse(color_a)?;
    let b = parser::parse(color_b)?;
    Some(contrast::contrast_ratio(&a, &b))
}

/// Badge for an already-computed ratio.
pub fn get_contrast_badge(ratio: f64) -> ComplianceBadge {
    compliance::badge(ratio)
}

/// Threshold query for an already-computed ratio.
pub fn meets_contrast_standard(ratio: f64, standard: Standard) -> bool {
    compliance::meets_standard(ratio, standard)
}

/// Adjusted background, in the canonical `"H S% L%"` form, reaching AAA
/// against the given text color.
pub fn fix_background_for_aaa(background: &str, text: &str) -> Option<String> {
    let background = parser::parse(background)?;
    let text = parser::parse(text)?;
    Some(autofix::fix_background_for_aaa(&background, &text).to_string())
}

/// Adjusted text color, in the canonical form, reaching AAA against the
/// given background.
pub fn fix_text_for_aaa(text: &str, background: &str) -> Option<String> {
    let text = parser::parse(text)?;
    let background = parser::parse(background)?;
    Some(autofix::fix_text_for_aaa(&text, &background).to_string())
}

/// Hex rendering of a textual color.
pub fn hsl_to_hex(color: &str) -> Option<String> {
    parser::parse(color).map(|color| convert::hsl_to_hex(&color))
}

/// `rgb(r, g, b)` rendering of a textual color.
pub fn hsl_to_rgb(color: &str) -> Option<String> {
    parser::parse(color).map(|color| convert::hsl_to_rgb_string(&color))
}

/// Full report for one background/text pair: the ratio, the badge, and
/// the threshold booleans a badge row renders from.
pub fn audit_pair(background: &str, text: &str) -> Option<ContrastReport> {
    let ratio = get_contrast_ratio(background, text)?;
    Some(ContrastReport {
        ratio,
        badge: compliance::badge(ratio),
        meets_aa: compliance::meets_standard(ratio, Standard::Aa),
        meets_aaa: compliance::meets_standard(ratio, Standard::Aaa),
        meets_large_text: compliance::meets_large_text(ratio),
    })
}

/// Which companion text a color wants when used as a background: dark
/// text on light colors, light text on dark ones.
pub fn companion_hint(color: &str) -> Option<CompanionHint> {
    let color = parser::parse(color)?;
    Some(if contrast::relative_luminance(&color) > 0.5 {
        CompanionHint::DarkText
    } else {
        CompanionHint::LightText
    })
}
