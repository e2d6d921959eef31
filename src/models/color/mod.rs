//! Canonical color model.
//!
//! Every algorithmic component operates on HSL, because lightness can be
//! adjusted independently of perceived hue. All other textual forms (hex,
//! `rgb(...)`, `hsl(...)`) are views converted at the parsing boundary.

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::utils::numeric::{clamp_percent, wrap_hue};

/// A color in HSL form.
///
/// Hue is in degrees [0, 360) and wraps modulo 360; saturation and
/// lightness are percentages clamped to [0, 100]. The constructor
/// normalizes, so a constructed `Hsl` is always in range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue angle in degrees, [0, 360)
    pub hue: f64,
    /// Saturation percentage, [0, 100]
    pub saturation: f64,
    /// Lightness percentage, [0, 100]
    pub lightness: f64,
}

impl Hsl {
    /// Create a color, wrapping hue and clamping saturation and lightness.
    pub fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue: wrap_hue(hue),
            saturation: clamp_percent(saturation),
            lightness: clamp_percent(lightness),
        }
    }

    /// Copy of this color with only the lightness replaced.
    pub fn with_lightness(&self, lightness: f64) -> Self {
        Self::new(self.hue, self.saturation, lightness)
    }

    /// Shift lightness up by `amount` percentage points.
    pub fn lighten(&self, amount: f64) -> Self {
        self.with_lightness(self.lightness + amount)
    }

    /// Shift lightness down by `amount` percentage points.
    pub fn darken(&self, amount: f64) -> Self {
        self.with_lightness(self.lightness - amount)
    }
}

impl fmt::Display for Hsl {
    /// Render the canonical wire form `"H S% L%"` used for stored values,
    /// with each component rounded to the nearest integer.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Rounding 359.6 yields 360, which must display as 0
        let hue = self.hue.round().rem_euclid(360.0);
        write!(
            f,
            "{} {}% {}%",
            hue as i64,
            self.saturation.round() as i64,
            self.lightness.round() as i64
        )
    }
}

impl Serialize for Hsl {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Hsl {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(D::Error::custom)
    }
}
