//! Compliance classification against the WCAG threshold table.

use crate::models::compliance::{ComplianceBadge, ComplianceLevel, Standard};

/// Immutable WCAG threshold table.
#[derive(Debug, Clone, Copy)]
pub struct ContrastThresholds {
    /// Minimum ratio for AA conformance, normal text
    pub aa: f64,
    /// Minimum ratio for AAA conformance, normal text
    pub aaa: f64,
    /// Relaxed minimum that applies to large text only
    pub large_text: f64,
}

/// Thresholds for normal-size text per WCAG 2.
pub const WCAG_THRESHOLDS: ContrastThresholds = ContrastThresholds {
    aa: 4.5,
    aaa: 7.0,
    large_text: 3.0,
};

/// Classify a ratio into a conformance level. Boundaries are inclusive:
/// exactly 4.5 passes AA and exactly 7.0 passes AAA.
pub fn level(ratio: f64) -> ComplianceLevel {
    if ratio >= WCAG_THRESHOLDS.aaa {
        ComplianceLevel::Aaa
    } else if ratio >= WCAG_THRESHOLDS.aa {
        ComplianceLevel::Aa
    } else {
        ComplianceLevel::Fail
    }
}

/// Badge for a ratio: label plus the style hint the UI renders with.
pub fn badge(ratio: f64) -> ComplianceBadge {
    level(ratio).into()
}

/// Pure threshold comparison against a target standard.
pub fn meets_standard(ratio: f64, standard: Standard) -> bool {
    match standard {
        Standard::Aa => ratio >= WCAG_THRESHOLDS.aa,
        Standard::Aaa => ratio >= WCAG_THRESHOLDS.aaa,
    }
}

/// Whether the ratio clears the large-text-only tier.
pub fn meets_large_text(ratio: f64) -> bool {
    ratio >= WCAG_THRESHOLDS.large_text
}
