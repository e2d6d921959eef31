// Numeric helpers shared by the color model and converters

/// Wrap a hue angle into [0, 360).
pub fn wrap_hue(hue: f64) -> f64 {
    let wrapped = hue.rem_euclid(360.0);
    // rem_euclid can round up to the modulus itself for tiny negatives
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Clamp a percentage to [0, 100].
pub fn clamp_percent(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

/// Round a normalized [0, 1] channel to an integer byte, re-clamping
/// after the rounding step.
pub fn round_channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}
