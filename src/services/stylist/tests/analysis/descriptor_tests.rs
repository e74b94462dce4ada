use super::*;
use crate::test_utils::garment;

fn detailed_item() -> WardrobeItem {
    WardrobeItem {
        color_tone: Some("light".into()),
        primary_color: Some("white".into()),
        material: Some("cotton".into()),
        pattern: Some("striped".into()),
        subcategory: Some("T-Shirt".into()),
        fit: Some("slim".into()),
        neckline: Some("crew".into()),
        sleeve: Some("short".into()),
        design_details: vec!["chest pocket".into(), " ".into()],
        ..garment("1", "Beyaz Tişört", "Tops")
    }
}

#[test]
fn test_description_combines_present_fields() {
    let description = describe_item(&detailed_item());
    assert_eq!(
        description,
        "Beyaz Tişört: light white cotton striped t-shirt, slim fit, crew neckline, short sleeves, details: chest pocket"
    );
}

#[test]
fn test_description_omits_missing_fields() {
    let description = describe_item(&garment("2", "Mavi Kot Pantolon", "Bottoms"));
    assert_eq!(description, "Mavi Kot Pantolon: bottoms");
    assert!(!description.contains("None"));
    assert!(!description.contains("fit"));
}

#[test]
fn test_two_colors_are_joined() {
    let item = WardrobeItem {
        primary_color: Some("navy".into()),
        secondary_color: Some("white".into()),
        ..garment("3", "Breton", "Tops")
    };
    assert_eq!(describe_item(&item), "Breton: navy and white tops");
}

#[test]
fn test_describe_is_idempotent() {
    let item = detailed_item();
    assert_eq!(describe_item(&item), describe_item(&item));
    assert_eq!(normalized_name(&item), normalized_name(&item));
}

#[test]
fn test_normalized_name_forms() {
    let names = normalized_name(&garment("4", "Beyaz T-Shirt!", "Tops"));
    assert_eq!(names.normalized, "beyaz t shirt");
    assert_eq!(names.compact, "beyaztshirt");
}
