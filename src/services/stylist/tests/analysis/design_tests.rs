use super::*;

fn profile(
    formality: u8,
    decorative_elements: usize,
    neckline_height: NecklineHeight,
) -> DesignProfile {
    DesignProfile {
        formality,
        decorative_elements,
        neckline_height,
    }
}

#[test]
fn test_formality_from_construction_keywords() {
    let blazer = WardrobeItem {
        name: "Wool Blazer".into(),
        collar: Some("Notch lapel".into()),
        closure: Some("Buttons".into()),
        material: Some("Wool".into()),
        ..Default::default()
    };
    let hoodie = WardrobeItem {
        name: "Hoodie".into(),
        neckline: Some("Hood".into()),
        closure: Some("Pull-on".into()),
        material: Some("Fleece".into()),
        design_details: vec!["Distressed hem".into()],
        ..Default::default()
    };

    let formal = design_profile(&blazer);
    let casual = design_profile(&hoodie);
    assert!(formal.formality >= 9, "blazer formality {}", formal.formality);
    assert_eq!(casual.formality, MIN_FORMALITY);
    assert_eq!(design_profile(&WardrobeItem::default()).formality, BASE_FORMALITY as u8);
}

#[test]
fn test_decorations_and_neckline_height() {
    let top = WardrobeItem {
        neckline: Some("Balıkçı yaka".into()),
        design_details: vec!["Nakış".into(), "Lace trim".into(), "Side slit".into()],
        ..Default::default()
    };
    let profile = design_profile(&top);
    assert_eq!(profile.decorative_elements, 2);
    assert_eq!(profile.neckline_height, NecklineHeight::High);

    let dress = WardrobeItem {
        neckline: Some("Deep V".into()),
        ..Default::default()
    };
    assert_eq!(design_profile(&dress).neckline_height, NecklineHeight::Low);
}

#[test]
fn test_coordinated_outfit_scores_ten() {
    let result = coordinate(&[
        profile(6, 0, NecklineHeight::Regular),
        profile(7, 1, NecklineHeight::Regular),
    ]);
    assert_eq!(result.score, 10);
    assert!(result.issues.is_empty());
}

#[test]
fn test_formality_gaps() {
    let major = coordinate(&[
        profile(2, 0, NecklineHeight::Regular),
        profile(8, 0, NecklineHeight::Regular),
    ]);
    assert_eq!(major.score, 10 - MAJOR_FORMALITY_PENALTY);
    assert_eq!(major.issues, vec![DesignIssue::MajorFormalityGap { range: 6 }]);

    let minor = coordinate(&[
        profile(4, 0, NecklineHeight::Regular),
        profile(7, 0, NecklineHeight::Regular),
    ]);
    assert_eq!(minor.score, 10 - MINOR_FORMALITY_PENALTY);
    assert_eq!(minor.issues, vec![DesignIssue::MinorFormalityGap { range: 3 }]);
}

#[test]
fn test_penalties_accumulate() {
    let result = coordinate(&[
        profile(1, 3, NecklineHeight::High),
        profile(10, 4, NecklineHeight::Low),
    ]);
    // 3 (formality) + 2 (capped decorations) + 2 (necklines)
    assert_eq!(result.score, 3);
    assert_eq!(result.issues.len(), 3);
    assert!(result.issues.contains(&DesignIssue::TooManyDecorations { count: 7 }));
    assert!(result.issues.contains(&DesignIssue::NecklineConflict));
}
