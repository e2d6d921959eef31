//! Color token model.
//!
//! Tokens are named design-system colors owned by the CMS storage layer.
//! The engine never creates, mutates, or deletes them; it validates a
//! token's value and may hand back a corrected value for the caller to
//! persist.

use serde::{Deserialize, Serialize};

use crate::models::color::Hsl;
use crate::models::compliance::CompanionHint;

/// A named, persisted design-system color definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorToken {
    /// Unique identifier (storage primary key)
    pub id: Option<i64>,
    /// Display label of the token (must be unique)
    pub label: String,
    /// Grouping used by the editing UI (e.g. "brand", "surface", "text")
    pub category: String,
    /// Color value in the canonical `"H S% L%"` wire form
    pub value: String,
    /// Which companion text color this token expects, if any
    pub companion: Option<CompanionHint>,
}

impl ColorToken {
    /// Create a new token with the given label, category and value.
    pub fn new(
        label: impl Into<String>,
        category: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            label: label.into(),
            category: category.into(),
            value: value.into(),
            companion: None,
        }
    }

    /// Create a new token carrying a companion-text hint.
    pub fn with_companion(
        label: impl Into<String>,
        category: impl Into<String>,
        value: impl Into<String>,
        companion: CompanionHint,
    ) -> Self {
        Self {
            id: None,
            label: label.into(),
            category: category.into(),
            value: value.into(),
            companion: Some(companion),
        }
    }

    /// Validate the token data.
    pub fn validate(&self) -> Result<(), TokenValidationError> {
        // Label validation
        let label = self.label.trim();
        if label.is_empty() {
            return Err(TokenValidationError::EmptyLabel);
        }
        if label.len() > 50 {
            return Err(TokenValidationError::LabelTooLong);
        }

        // Value must parse as a color in one of the accepted forms
        if self.value.parse::<Hsl>().is_err() {
            return Err(TokenValidationError::InvalidValue);
        }

        Ok(())
    }

    /// The token's value as the canonical model, if it parses.
    pub fn color(&self) -> Option<Hsl> {
        self.value.parse().ok()
    }
}

/// Validation errors for ColorToken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenValidationError {
    EmptyLabel,
    LabelTooLong,
    InvalidValue,
}

impl std::fmt::Display for TokenValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyLabel => write!(f, "Token label cannot be empty"),
            Self::LabelTooLong => write!(f, "Token label must be 50 characters or less"),
            Self::InvalidValue => {
                write!(f, "Invalid color value (use the \"H S% L%\" form, hex, rgb() or hsl())")
            }
        }
    }
}

impl std::error::Error for TokenValidationError {}

/// Default tokens that ship with the application.
pub fn default_tokens() -> Vec<ColorToken> {
    vec![
        ColorToken::with_companion("Primary", "brand", "249 67% 24%", CompanionHint::LightText),
        ColorToken::with_companion("Accent", "brand", "262 83% 58%", CompanionHint::LightText),
        ColorToken::with_companion("Surface", "surface", "0 0% 100%", CompanionHint::DarkText),
        ColorToken::with_companion("Ink", "text", "222 47% 11%", CompanionHint::LightText),
        ColorToken::new("Muted", "text", "215 16% 47%"),
    ]
}
