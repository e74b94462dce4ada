use serde::{Deserialize, Serialize};

/// A garment owned by one user.
///
/// Every attribute except identity, name and category is optional; the
/// photo-analysis step fills in whatever it can recognize.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WardrobeItem {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub category: String,
    pub subcategory: Option<String>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    /// light, dark, bright, muted, pastel
    pub color_tone: Option<String>,
    pub material: Option<String>,
    pub pattern: Option<String>,
    pub pattern_type: Option<String>,
    pub fit: Option<String>,
    pub neckline: Option<String>,
    pub collar: Option<String>,
    pub sleeve: Option<String>,
    pub closure: Option<String>,
    pub pocket_style: Option<String>,
    pub waist_style: Option<String>,
    pub design_details: Vec<String>,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub image_url: Option<String>,
}

/// Row shape of the `wardrobe_items` table. `design_details` is stored as a
/// JSON array string.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct WardrobeItemRow {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub category: String,
    pub subcategory: Option<String>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub color_tone: Option<String>,
    pub material: Option<String>,
    pub pattern: Option<String>,
    pub pattern_type: Option<String>,
    pub fit: Option<String>,
    pub neckline: Option<String>,
    pub collar: Option<String>,
    pub sleeve: Option<String>,
    pub closure: Option<String>,
    pub pocket_style: Option<String>,
    pub waist_style: Option<String>,
    pub design_details: String,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub image_url: Option<String>,
}

impl From<WardrobeItemRow> for WardrobeItem {
    fn from(row: WardrobeItemRow) -> Self {
        let design_details = serde_json::from_str(&row.design_details).unwrap_or_else(|e| {
            log::warn!("Corrupt design_details for item {}: {e}", row.id);
            Vec::new()
        });

        Self {
            id: row.id,
            owner_id: row.owner_id,
            name: row.name,
            category: row.category,
            subcategory: row.subcategory,
            primary_color: row.primary_color,
            secondary_color: row.secondary_color,
            color_tone: row.color_tone,
            material: row.material,
            pattern: row.pattern,
            pattern_type: row.pattern_type,
            fit: row.fit,
            neckline: row.neckline,
            collar: row.collar,
            sleeve: row.sleeve,
            closure: row.closure,
            pocket_style: row.pocket_style,
            waist_style: row.waist_style,
            design_details,
            description: row.description,
            notes: row.notes,
            image_url: row.image_url,
        }
    }
}

/// User-editable descriptive fields. These stay mutable even after the item
/// is referenced by a saved outfit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DescriptiveUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub notes: Option<String>,
}

/// Outfit explicitly saved by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedOutfit {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub clothing_item_ids: Vec<String>,
    pub styling_tips: String,
    pub occasion: Option<String>,
    pub time_of_day: Option<String>,
    pub weather: Option<String>,
    /// RFC 3339 timestamp.
    pub saved_at: String,
    pub image_url: Option<String>,
}

/// Payload for `outfit_repo::save_outfit`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewSavedOutfit {
    pub name: String,
    pub clothing_item_ids: Vec<String>,
    pub styling_tips: String,
    pub occasion: Option<String>,
    pub time_of_day: Option<String>,
    pub weather: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SavedOutfitRow {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub styling_tips: String,
    pub occasion: Option<String>,
    pub time_of_day: Option<String>,
    pub weather: Option<String>,
    pub saved_at: String,
    pub image_url: Option<String>,
}

#[cfg(test)]
#[path = "tests/models_tests.rs"]
mod tests;
