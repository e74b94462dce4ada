use super::*;

#[test]
fn test_weights_sum_to_one() {
    assert!((COLOR_WEIGHT + PATTERN_WEIGHT + DESIGN_WEIGHT - 1.0).abs() < f32::EPSILON);
}

#[test]
fn test_clamp_confidence() {
    assert_eq!(clamp_confidence(12.0), CONFIDENCE_CEILING);
    assert_eq!(clamp_confidence(-3.0), MIN_CONFIDENCE);
    assert_eq!(clamp_confidence(6.6), 7);
    assert_eq!(clamp_confidence(f64::NAN), MIN_CONFIDENCE);
}

#[test]
fn test_plain_outfit_scores_high() {
    let shirt = WardrobeItem {
        name: "White Shirt".into(),
        primary_color: Some("white".into()),
        ..Default::default()
    };
    let trousers = WardrobeItem {
        name: "Grey Trousers".into(),
        primary_color: Some("gray".into()),
        ..Default::default()
    };
    let evaluation = evaluate_outfit(&[&shirt, &trousers]);
    // Both neutrals sit at hue 0: monochromatic 9, no patterns 9, no design issues 10.
    assert_eq!(evaluation.color_score, 9.0);
    assert_eq!(evaluation.pattern_score, 9.0);
    assert_eq!(evaluation.design.score, 10);
    assert_eq!(evaluation.total, 9);
    assert_eq!(evaluation.harmony, Some(HarmonyClass::Monochromatic));
    assert!(evaluation.weakest_mix.is_none());
}

#[test]
fn test_total_is_bounded() {
    let evaluation = evaluate_outfit(&[]);
    assert!((MIN_CONFIDENCE..=MAX_CONFIDENCE).contains(&evaluation.total));
}
