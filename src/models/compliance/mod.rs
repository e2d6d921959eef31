//! Compliance model types.
//!
//! Badges are derived on demand from a contrast ratio by the compliance
//! service and never stored; nothing here has an independent lifecycle.

use serde::{Deserialize, Serialize};

/// WCAG conformance level for normal-size text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplianceLevel {
    Fail,
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "AAA")]
    Aaa,
}

impl ComplianceLevel {
    /// Badge label shown next to a color pair.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Fail => "Fail",
            Self::Aa => "AA",
            Self::Aaa => "AAA",
        }
    }

    /// Semantic class the UI styles the badge with.
    pub fn style_hint(&self) -> &'static str {
        match self {
            Self::Fail => "danger",
            Self::Aa => "warning",
            Self::Aaa => "success",
        }
    }
}

/// A displayable compliance badge: label plus styling hint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceBadge {
    pub label: String,
    pub style_hint: String,
}

impl From<ComplianceLevel> for ComplianceBadge {
    fn from(level: ComplianceLevel) -> Self {
        Self {
            label: level.label().to_string(),
            style_hint: level.style_hint().to_string(),
        }
    }
}

/// Target standard for threshold queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Standard {
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "AAA")]
    Aaa,
}

/// Which companion text color a background expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompanionHint {
    /// Light text reads best on this color
    LightText,
    /// Dark text reads best on this color
    DarkText,
}

/// Everything a UI badge row needs for one background/text pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContrastReport {
    /// WCAG contrast ratio, always >= 1
    pub ratio: f64,
    pub badge: ComplianceBadge,
    pub meets_aa: bool,
    pub meets_aaa: bool,
    /// The relaxed >= 3.0 tier that applies to large text only
    pub meets_large_text: bool,
}
