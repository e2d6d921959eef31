//! Automatic repair of failing color pairs.
//!
//! Holds one color of the pair fixed (the anchor) and walks the other
//! color's lightness axis until the pair reaches AAA contrast. Hue and
//! saturation of the adjusted color are never touched, so the repaired
//! color still reads as the same color, only brighter or darker.

use crate::models::color::Hsl;
use crate::services::compliance::WCAG_THRESHOLDS;
use crate::services::contrast::{contrast_ratio, relative_luminance};

/// Lightness step per search iteration, in percentage points.
const STEP: f64 = 1.0;

/// Adjusted background reaching AAA contrast against the given text
/// color. Already-compliant backgrounds come back unchanged.
pub fn fix_background_for_aaa(background: &Hsl, text: &Hsl) -> Hsl {
    fix_target(text, background)
}

/// Adjusted text color reaching AAA contrast against the given
/// background. Already-compliant text comes back unchanged.
pub fn fix_text_for_aaa(text: &Hsl, background: &Hsl) -> Hsl {
    fix_target(background, text)
}

/// Walk `target`'s lightness away from `anchor` until the pair clears
/// the AAA threshold, or an extreme of the lightness range is reached
/// (in which case the extreme is the best achievable approximation).
fn fix_target(anchor: &Hsl, target: &Hsl) -> Hsl {
    if contrast_ratio(anchor, target) >= WCAG_THRESHOLDS.aaa {
        return *target;
    }

    let anchor_luminance = relative_luminance(anchor);
    let target_luminance = relative_luminance(target);
    // A darker anchor means the target must move toward white, a lighter
    // anchor toward black. On equal luminance, move away from the side
    // the anchor occupies.
    let brighten = if anchor_luminance == target_luminance {
        anchor_luminance <= 0.5
    } else {
        anchor_luminance < target_luminance
    };

    let limit = if brighten { 100.0 } else { 0.0 };
    let mut candidate = *target;
    while candidate.lightness != limit {
        let next = if brighten {
            (candidate.lightness + STEP).min(100.0)
        } else {
            (candidate.lightness - STEP).max(0.0)
        };
        candidate = target.with_lightness(next);
        if contrast_ratio(anchor, &candidate) >= WCAG_THRESHOLDS.aaa {
            log::debug!(
                "auto-fix moved lightness {} -> {} (ratio {:.2})",
                target.lightness,
                candidate.lightness,
                contrast_ratio(anchor, &candidate)
            );
            return candidate;
        }
    }

    log::debug!(
        "auto-fix exhausted lightness range at {limit} (best effort, ratio {:.2})",
        contrast_ratio(anchor, &candidate)
    );
    candidate
}
