use super::*;

fn hue(h: f32) -> ColorInfo {
    ColorInfo {
        hue: h,
        saturation: 60.0,
        lightness: 50.0,
        known: true,
    }
}

#[test]
fn test_small_hue_difference_is_monochromatic() {
    for (a, b) in [(0.0, 0.0), (10.0, 40.0), (200.0, 220.0), (300.0, 330.0)] {
        let harmony = classify_harmony(&hue(a), &hue(b));
        assert_eq!(harmony.class, HarmonyClass::Monochromatic, "{a} vs {b}");
        assert_eq!(harmony.score, 9);
    }
}

#[test]
fn test_opposite_hues_are_complementary() {
    for (a, b) in [(0.0, 180.0), (30.0, 210.0), (270.0, 90.0)] {
        let harmony = classify_harmony(&hue(a), &hue(b));
        assert_eq!(harmony.class, HarmonyClass::Complementary, "{a} vs {b}");
    }
}

#[test]
fn test_class_boundaries() {
    let base = hue(0.0);
    assert_eq!(classify_harmony(&base, &hue(31.0)).class, HarmonyClass::Analogous);
    assert_eq!(classify_harmony(&base, &hue(60.0)).class, HarmonyClass::Analogous);
    assert_eq!(
        classify_harmony(&base, &hue(75.0)).class,
        HarmonyClass::SplitComplementary
    );
    assert_eq!(classify_harmony(&base, &hue(120.0)).class, HarmonyClass::Triadic);
    assert_eq!(classify_harmony(&base, &hue(211.0)).class, HarmonyClass::Neutral);
    assert_eq!(HarmonyClass::Neutral.score(), 5);
}

#[test]
fn test_lookup_english_and_turkish_names() {
    let navy = color_info(Some("Navy"), None);
    let lacivert = color_info(Some("Lacivert"), None);
    assert!(navy.known);
    assert_eq!(navy, lacivert);
    assert!(navy.is_dark());
    assert!(color_info(Some("Beyaz"), None).is_light());
}

#[test]
fn test_tone_adjusts_lightness_and_saturation() {
    let blue = color_info(Some("blue"), None);
    let light = color_info(Some("blue"), Some("light"));
    let embedded = color_info(Some("Koyu Mavi"), None);
    let pastel = color_info(Some("pink"), Some("pastel"));

    assert_eq!(light.lightness, blue.lightness + LIGHT_LIGHTNESS_DELTA);
    assert_eq!(embedded.lightness, blue.lightness + DARK_LIGHTNESS_DELTA);
    assert_eq!(pastel.saturation, 70.0 + PASTEL_SATURATION_DELTA);
    assert_eq!(pastel.lightness, 100.0);
}

#[test]
fn test_unknown_color_falls_back_to_gray() {
    let unknown = color_info(Some("vantablack-ish"), None);
    assert_eq!(unknown, ColorInfo::UNKNOWN);
    assert_eq!(color_info(None, Some("dark")), ColorInfo::UNKNOWN);
    assert_eq!(unknown.saturation, 0.0);
}

#[test]
fn test_outfit_harmony_averages_pairs() {
    assert_eq!(outfit_harmony(&[hue(0.0)]), SINGLE_COLOR_HARMONY);
    // 0/20 mono (9), 0/120 triadic (6), 20/120 triadic (6)
    let avg = outfit_harmony(&[hue(0.0), hue(20.0), hue(120.0)]);
    assert!((avg - 7.0).abs() < f32::EPSILON);
    assert_eq!(
        dominant_harmony(&[hue(0.0), hue(20.0), hue(120.0)]),
        Some(HarmonyClass::Triadic)
    );
}
