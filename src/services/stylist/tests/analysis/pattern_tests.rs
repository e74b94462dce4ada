use super::*;

fn pattern(
    pattern_type: &str,
    scale: PatternScale,
    complexity: u8,
    geometric: bool,
    organic: bool,
) -> PatternInfo {
    PatternInfo {
        pattern_type: pattern_type.to_string(),
        scale,
        complexity,
        geometric,
        organic,
    }
}

#[test]
fn test_keyword_lookup() {
    let stripe = pattern_info(Some("Striped"));
    assert_eq!(stripe.pattern_type, "stripe");
    assert_eq!(stripe.scale, PatternScale::Medium);
    assert!(stripe.geometric);

    let pin = pattern_info(Some("pinstripe"));
    assert_eq!(pin.scale, PatternScale::Fine);

    let cicek = pattern_info(Some("Çiçekli"));
    assert_eq!(cicek.pattern_type, "floral");
    assert!(cicek.organic);

    assert_eq!(pattern_info(Some("large floral")).scale, PatternScale::Large);
    assert_eq!(pattern_info(None), PatternInfo::solid());
    assert_eq!(pattern_info(Some("mystery weave")), PatternInfo::solid());
}

#[test]
fn test_item_pattern_prefers_specific_type() {
    let item = WardrobeItem {
        pattern: Some("patterned".into()),
        pattern_type: Some("houndstooth".into()),
        ..Default::default()
    };
    assert_eq!(item_pattern(&item).pattern_type, "houndstooth");

    let item = WardrobeItem {
        pattern: Some("plaid".into()),
        ..Default::default()
    };
    assert_eq!(item_pattern(&item).pattern_type, "check");
}

#[test]
fn test_near_solid_always_mixes_at_nine() {
    let busy = [
        pattern("paisley", PatternScale::Large, 10, false, true),
        pattern("check", PatternScale::Medium, 6, true, false),
        pattern("graphic", PatternScale::Fine, 9, false, false),
    ];
    for other in &busy {
        for complexity in [1, 2] {
            let calm = pattern("textured", PatternScale::Large, complexity, false, false);
            let forward = evaluate_mix(&calm, other);
            let backward = evaluate_mix(other, &calm);
            assert!(forward.mixable && backward.mixable);
            assert_eq!(forward.confidence, 9);
            assert_eq!(backward.confidence, 9);
        }
    }
}

#[test]
fn test_differing_scales_scale_confidence_with_distance() {
    let fine = pattern("stripe", PatternScale::Fine, 5, true, false);
    let medium = pattern("floral", PatternScale::Medium, 6, false, true);
    let large = pattern("floral", PatternScale::Large, 6, false, true);

    let near = evaluate_mix(&fine, &medium);
    let far = evaluate_mix(&fine, &large);
    assert!(near.mixable && far.mixable);
    assert!(far.confidence > near.confidence);
}

#[test]
fn test_same_type_different_scale_is_high_confidence() {
    let small = pattern("stripe", PatternScale::Fine, 4, true, false);
    let bold = pattern("stripe", PatternScale::Medium, 4, true, false);
    let verdict = evaluate_mix(&small, &bold);
    assert!(verdict.mixable);
    assert!(verdict.confidence >= SAME_TYPE_SCALE_CONFIDENCE);
}

#[test]
fn test_geometric_organic_same_scale() {
    let check = pattern("check", PatternScale::Medium, 6, true, false);
    let floral = pattern("floral", PatternScale::Medium, 4, false, true);
    let verdict = evaluate_mix(&check, &floral);
    assert!(verdict.mixable);
    assert_eq!(verdict.confidence, GEOMETRIC_ORGANIC_CONFIDENCE);
}

#[test]
fn test_similar_busy_patterns_rejected() {
    let check = pattern("check", PatternScale::Medium, 6, true, false);
    let graphic = pattern("graphic", PatternScale::Medium, 5, false, false);
    let verdict = evaluate_mix(&check, &graphic);
    assert!(!verdict.mixable);
    assert_eq!(verdict.confidence, COMPETING_PATTERNS_CONFIDENCE);
}

#[test]
fn test_outfit_pattern_score() {
    let solid = PatternInfo::solid();
    assert_eq!(outfit_pattern_score(&[solid.clone(), solid.clone()]), SINGLE_PATTERN_SCORE);

    let stripe = pattern("stripe", PatternScale::Fine, 4, true, false);
    let floral = pattern("floral", PatternScale::Large, 6, false, true);
    let score = outfit_pattern_score(&[stripe.clone(), solid, floral.clone()]);
    assert_eq!(score, evaluate_mix(&stripe, &floral).confidence as f32);
    assert_eq!(
        weakest_mix(&[stripe.clone(), floral.clone()]),
        Some(evaluate_mix(&stripe, &floral))
    );
    assert!(weakest_mix(&[stripe]).is_none());
}
