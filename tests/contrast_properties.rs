// Property-based tests for the color accessibility engine
// Exercises the core invariants with random inputs

use proptest::prelude::*;

use contrast_kit::models::color::Hsl;
use contrast_kit::services::accessibility;
use contrast_kit::services::autofix::{fix_background_for_aaa, fix_text_for_aaa};
use contrast_kit::services::contrast::contrast_ratio;

/// Strategy producing arbitrary in-range colors
fn any_color() -> impl Strategy<Value = Hsl> {
    (0.0..360.0f64, 0.0..=100.0f64, 0.0..=100.0f64)
        .prop_map(|(h, s, l)| Hsl::new(h, s, l))
}

/// Smallest circular distance between two hue angles
fn hue_distance(a: f64, b: f64) -> f64 {
    let diff = (a - b).abs();
    diff.min(360.0 - diff)
}

proptest! {
    /// Property: the canonical string form survives a parse round trip
    /// within 1 unit per channel (display rounds to integers)
    #[test]
    fn prop_canonical_round_trip(color in any_color()) {
        let wire = color.to_string();
        let parsed = accessibility::parse_color_to_hsl(&wire)
            .expect("canonical form must always parse");

        prop_assert!(hue_distance(parsed.hue, color.hue) <= 1.0);
        prop_assert!((parsed.saturation - color.saturation).abs() <= 1.0);
        prop_assert!((parsed.lightness - color.lightness).abs() <= 1.0);
    }

    /// Property: contrast ratio is symmetric in its arguments
    #[test]
    fn prop_ratio_symmetric(a in any_color(), b in any_color()) {
        prop_assert_eq!(contrast_ratio(&a, &b), contrast_ratio(&b, &a));
    }

    /// Property: a color against itself has no contrast
    #[test]
    fn prop_self_contrast_is_one(color in any_color()) {
        prop_assert!((contrast_ratio(&color, &color) - 1.0).abs() < 1e-9);
    }

    /// Property: the ratio never drops below 1
    #[test]
    fn prop_ratio_at_least_one(a in any_color(), b in any_color()) {
        prop_assert!(contrast_ratio(&a, &b) >= 1.0);
    }

    /// Property: widening the lightness gap at fixed hue/saturation
    /// never decreases the ratio
    #[test]
    fn prop_gap_monotonicity(
        color in any_color(),
        near in 0.0..=50.0f64,
        extra in 0.0..=50.0f64,
    ) {
        let close = color.with_lightness(color.lightness.min(50.0) + near);
        let far = color.with_lightness(close.lightness + extra);
        let base = color.with_lightness(color.lightness.min(50.0));

        prop_assert!(
            contrast_ratio(&base, &far) + 1e-9 >= contrast_ratio(&base, &close)
        );
    }

    /// Property: text fixes keep hue and saturation and either reach
    /// AAA or bottom out at a lightness extreme
    #[test]
    fn prop_fix_text_preserves_hue_and_saturation(
        background in any_color(),
        text in any_color(),
    ) {
        let fixed = fix_text_for_aaa(&text, &background);

        prop_assert_eq!(fixed.hue, text.hue);
        prop_assert_eq!(fixed.saturation, text.saturation);
        prop_assert!(
            contrast_ratio(&background, &fixed) >= 7.0
                || fixed.lightness == 0.0
                || fixed.lightness == 100.0
        );
    }

    /// Property: background fixes behave the same with the pair swapped
    #[test]
    fn prop_fix_background_preserves_hue_and_saturation(
        background in any_color(),
        text in any_color(),
    ) {
        let fixed = fix_background_for_aaa(&background, &text);

        prop_assert_eq!(fixed.hue, background.hue);
        prop_assert_eq!(fixed.saturation, background.saturation);
        prop_assert!(
            contrast_ratio(&fixed, &text) >= 7.0
                || fixed.lightness == 0.0
                || fixed.lightness == 100.0
        );
    }

    /// Property: the fix is idempotent - running it a second time on
    /// its own output changes nothing
    #[test]
    fn prop_fix_is_idempotent(
        background in any_color(),
        text in any_color(),
    ) {
        let once = fix_text_for_aaa(&text, &background);
        let twice = fix_text_for_aaa(&once, &background);
        prop_assert_eq!(once, twice);
    }

    /// Property: construction always lands in range, whatever the input
    #[test]
    fn prop_construction_normalizes(
        h in -1000.0..1000.0f64,
        s in -200.0..300.0f64,
        l in -200.0..300.0f64,
    ) {
        let color = Hsl::new(h, s, l);
        prop_assert!((0.0..360.0).contains(&color.hue));
        prop_assert!((0.0..=100.0).contains(&color.saturation));
        prop_assert!((0.0..=100.0).contains(&color.lightness));
    }

    /// Property: the parser never panics, whatever the input string
    #[test]
    fn prop_parser_total_over_strings(input in ".*") {
        let _ = accessibility::parse_color_to_hsl(&input);
    }
}
