//! Garment role classification from category, subcategory and name keywords.

use crate::database::models::WardrobeItem;
use crate::services::stylist::core::normalizer::{contains_any_keyword, normalize_name};
use crate::services::stylist::models::keywords::{
    ACCESSORY_KEYWORDS, BOTTOM_KEYWORDS, FOOTWEAR_KEYWORDS, FULL_BODY_KEYWORDS,
    OUTERWEAR_KEYWORDS, SHIRT_FAMILY, SWEATER_FAMILY, TOP_KEYWORDS, TSHIRT_FAMILY,
};

/// Where a garment sits on the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GarmentRole {
    Top,
    Bottom,
    /// Dresses and jumpsuits: satisfy both the top and the bottom slot.
    FullBody,
    Outerwear,
    Footwear,
    Accessory,
    Other,
}

impl GarmentRole {
    pub fn covers_top(self) -> bool {
        matches!(self, GarmentRole::Top | GarmentRole::FullBody)
    }

    pub fn covers_bottom(self) -> bool {
        matches!(self, GarmentRole::Bottom | GarmentRole::FullBody)
    }
}

/// Layer family of an upper-body garment, used for conflict checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopFamily {
    TShirt,
    Sweater,
    Shirt,
}

/// Classification order. Outerwear and bottoms come before footwear and
/// tops so "denim jacket", "boot cut jeans" and "sweatpants" land correctly.
const ROLE_ORDER: &[(GarmentRole, &[&str])] = &[
    (GarmentRole::FullBody, FULL_BODY_KEYWORDS),
    (GarmentRole::Outerwear, OUTERWEAR_KEYWORDS),
    (GarmentRole::Bottom, BOTTOM_KEYWORDS),
    (GarmentRole::Footwear, FOOTWEAR_KEYWORDS),
    (GarmentRole::Accessory, ACCESSORY_KEYWORDS),
    (GarmentRole::Top, TOP_KEYWORDS),
];

/// Classify free text into a role, if any keyword matches.
pub fn classify_text(text: &str) -> Option<GarmentRole> {
    let normalized = normalize_name(text);
    if normalized.is_empty() {
        return None;
    }

    ROLE_ORDER
        .iter()
        .find(|(_, keywords)| contains_any_keyword(&normalized, keywords))
        .map(|(role, _)| *role)
}

/// Classify an item. The stored category wins, then the subcategory, then
/// the item name.
pub fn classify_item(item: &WardrobeItem) -> GarmentRole {
    classify_text(&item.category)
        .or_else(|| item.subcategory.as_deref().and_then(classify_text))
        .or_else(|| classify_text(&item.name))
        .unwrap_or(GarmentRole::Other)
}

/// Layer family from the most specific text available (name, then
/// subcategory). The category alone ("Tops") never implies a family, and
/// only items classified as tops have one: "Sweatpants" or "Shirt Dress"
/// do not compete for a top layer.
pub fn top_family(item: &WardrobeItem) -> Option<TopFamily> {
    if classify_item(item) != GarmentRole::Top {
        return None;
    }
    family_of(&item.name).or_else(|| item.subcategory.as_deref().and_then(family_of))
}

fn family_of(text: &str) -> Option<TopFamily> {
    let normalized = normalize_name(text);
    if contains_any_keyword(&normalized, SWEATER_FAMILY) {
        Some(TopFamily::Sweater)
    } else if contains_any_keyword(&normalized, TSHIRT_FAMILY) {
        Some(TopFamily::TShirt)
    } else if contains_any_keyword(&normalized, SHIRT_FAMILY) {
        Some(TopFamily::Shirt)
    } else {
        None
    }
}

#[cfg(test)]
#[path = "../tests/analysis/garment_tests.rs"]
mod tests;
