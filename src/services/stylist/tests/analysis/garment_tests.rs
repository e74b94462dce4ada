use super::*;
use crate::test_utils::garment;

#[test]
fn test_category_drives_role() {
    assert_eq!(classify_item(&garment("1", "Whatever", "Tops")), GarmentRole::Top);
    assert_eq!(
        classify_item(&garment("2", "Whatever", "Bottoms")),
        GarmentRole::Bottom
    );
    assert_eq!(
        classify_item(&garment("3", "Whatever", "Dresses")),
        GarmentRole::FullBody
    );
    assert_eq!(
        classify_item(&garment("4", "Whatever", "Shoes")),
        GarmentRole::Footwear
    );
}

#[test]
fn test_name_used_when_category_unknown() {
    assert_eq!(
        classify_item(&garment("1", "Mavi Kot Pantolon", "Giyim")),
        GarmentRole::Bottom
    );
    assert_eq!(
        classify_item(&garment("2", "Denim Jacket", "")),
        GarmentRole::Outerwear
    );
    assert_eq!(
        classify_item(&garment("3", "Boot-cut jeans", "")),
        GarmentRole::Bottom
    );
    assert_eq!(classify_item(&garment("4", "Mystery", "")), GarmentRole::Other);
}

#[test]
fn test_full_body_covers_both_slots() {
    assert!(GarmentRole::FullBody.covers_top());
    assert!(GarmentRole::FullBody.covers_bottom());
    assert!(!GarmentRole::Outerwear.covers_top());
}

#[test]
fn test_top_family_prefers_tshirt_over_shirt_substring() {
    assert_eq!(
        top_family(&garment("1", "Beyaz Tişört", "Tops")),
        Some(TopFamily::TShirt)
    );
    assert_eq!(
        top_family(&garment("2", "Grey Sweatshirt", "Tops")),
        Some(TopFamily::Sweater)
    );
    assert_eq!(
        top_family(&garment("3", "Oxford Shirt", "Tops")),
        Some(TopFamily::Shirt)
    );
    assert_eq!(top_family(&garment("4", "Cardigan", "Tops")), None);
}

#[test]
fn test_top_family_ignores_non_tops() {
    assert_eq!(top_family(&garment("1", "Grey Sweatpants", "Bottoms")), None);
    assert_eq!(top_family(&garment("2", "Sweat Shorts", "Bottoms")), None);
    assert_eq!(top_family(&garment("3", "Denim Shirt Dress", "Dresses")), None);
    assert_eq!(top_family(&garment("4", "Linen Shirt Jacket", "Outerwear")), None);
    assert_eq!(
        top_family(&garment("5", "Flannel Shirt", "Tops")),
        Some(TopFamily::Shirt)
    );
}
