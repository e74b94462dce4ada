use sqlx::SqlitePool;

use crate::database::models::{DescriptiveUpdate, WardrobeItem, WardrobeItemRow};
use crate::types::errors::{StyleError, StyleResult};

const ITEM_COLUMNS: &str = "id, owner_id, name, category, subcategory, primary_color, secondary_color, \
     color_tone, material, pattern, pattern_type, fit, neckline, collar, sleeve, closure, \
     pocket_style, waist_style, design_details, description, notes, image_url";

// ── Wardrobe CRUD ───────────────────────────────────────────

/// Insert a new wardrobe item. An empty `id` gets a fresh UUID.
/// Returns the stored item.
pub async fn insert_item(pool: &SqlitePool, item: &WardrobeItem) -> StyleResult<WardrobeItem> {
    if item.name.trim().is_empty() {
        return Err(StyleError::Validation("Item name is required".to_string()));
    }
    if item.owner_id.trim().is_empty() {
        return Err(StyleError::Validation("Item owner is required".to_string()));
    }

    let mut stored = item.clone();
    if stored.id.trim().is_empty() {
        stored.id = uuid::Uuid::new_v4().to_string();
    }
    let details = serde_json::to_string(&stored.design_details)
        .map_err(|e| StyleError::Validation(format!("Invalid design details: {e}")))?;

    sqlx::query(&format!(
        "INSERT INTO wardrobe_items ({ITEM_COLUMNS}) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"
    ))
    .bind(&stored.id)
    .bind(&stored.owner_id)
    .bind(&stored.name)
    .bind(&stored.category)
    .bind(&stored.subcategory)
    .bind(&stored.primary_color)
    .bind(&stored.secondary_color)
    .bind(&stored.color_tone)
    .bind(&stored.material)
    .bind(&stored.pattern)
    .bind(&stored.pattern_type)
    .bind(&stored.fit)
    .bind(&stored.neckline)
    .bind(&stored.collar)
    .bind(&stored.sleeve)
    .bind(&stored.closure)
    .bind(&stored.pocket_style)
    .bind(&stored.waist_style)
    .bind(&details)
    .bind(&stored.description)
    .bind(&stored.notes)
    .bind(&stored.image_url)
    .execute(pool)
    .await?;

    log::info!("Wardrobe item added: {} ({})", stored.name, stored.id);
    Ok(stored)
}

/// All items belonging to one owner, oldest first.
pub async fn list_items_for_owner(
    pool: &SqlitePool,
    owner_id: &str,
) -> Result<Vec<WardrobeItem>, sqlx::Error> {
    let rows = sqlx::query_as::<_, WardrobeItemRow>(&format!(
        "SELECT {ITEM_COLUMNS} FROM wardrobe_items WHERE owner_id = ? ORDER BY created_at, rowid"
    ))
    .bind(owner_id)
    .fetch_all(pool)
    .await?;
    Ok(rows.into_iter().map(WardrobeItem::from).collect())
}

/// Get a single item scoped to its owner.
pub async fn get_item(
    pool: &SqlitePool,
    owner_id: &str,
    item_id: &str,
) -> Result<Option<WardrobeItem>, sqlx::Error> {
    let row = sqlx::query_as::<_, WardrobeItemRow>(&format!(
        "SELECT {ITEM_COLUMNS} FROM wardrobe_items WHERE owner_id = ? AND id = ?"
    ))
    .bind(owner_id)
    .bind(item_id)
    .fetch_optional(pool)
    .await?;
    Ok(row.map(WardrobeItem::from))
}

/// Update the descriptive fields (name, description, notes) of an item.
/// Structural attributes are left untouched.
pub async fn update_descriptive_fields(
    pool: &SqlitePool,
    owner_id: &str,
    item_id: &str,
    update: &DescriptiveUpdate,
) -> StyleResult<()> {
    if let Some(name) = &update.name {
        if name.trim().is_empty() {
            return Err(StyleError::Validation("Item name cannot be empty".to_string()));
        }
    }

    let result = sqlx::query(
        "UPDATE wardrobe_items SET
            name = COALESCE(?, name),
            description = COALESCE(?, description),
            notes = COALESCE(?, notes),
            updated_at = CURRENT_TIMESTAMP
         WHERE owner_id = ? AND id = ?",
    )
    .bind(&update.name)
    .bind(&update.description)
    .bind(&update.notes)
    .bind(owner_id)
    .bind(item_id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(StyleError::NotFound(format!("Wardrobe item {item_id}")));
    }
    Ok(())
}

/// Replace the full attribute set of an item.
///
/// Refused while a saved outfit references the item: only descriptive fields
/// may change after that point.
pub async fn update_item(pool: &SqlitePool, item: &WardrobeItem) -> StyleResult<()> {
    if count_outfit_references(pool, &item.id).await? > 0 {
        return Err(StyleError::Validation(format!(
            "Item {} is part of a saved outfit; only name, description and notes can change",
            item.id
        )));
    }

    let details = serde_json::to_string(&item.design_details)
        .map_err(|e| StyleError::Validation(format!("Invalid design details: {e}")))?;

    let result = sqlx::query(
        "UPDATE wardrobe_items SET
            name = ?, category = ?, subcategory = ?, primary_color = ?, secondary_color = ?,
            color_tone = ?, material = ?, pattern = ?, pattern_type = ?, fit = ?, neckline = ?,
            collar = ?, sleeve = ?, closure = ?, pocket_style = ?, waist_style = ?,
            design_details = ?, description = ?, notes = ?, image_url = ?,
            updated_at = CURRENT_TIMESTAMP
         WHERE owner_id = ? AND id = ?",
    )
    .bind(&item.name)
    .bind(&item.category)
    .bind(&item.subcategory)
    .bind(&item.primary_color)
    .bind(&item.secondary_color)
    .bind(&item.color_tone)
    .bind(&item.material)
    .bind(&item.pattern)
    .bind(&item.pattern_type)
    .bind(&item.fit)
    .bind(&item.neckline)
    .bind(&item.collar)
    .bind(&item.sleeve)
    .bind(&item.closure)
    .bind(&item.pocket_style)
    .bind(&item.waist_style)
    .bind(&details)
    .bind(&item.description)
    .bind(&item.notes)
    .bind(&item.image_url)
    .bind(&item.owner_id)
    .bind(&item.id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(StyleError::NotFound(format!("Wardrobe item {}", item.id)));
    }
    Ok(())
}

/// Delete an item. Refused while a saved outfit still references it.
pub async fn delete_item(pool: &SqlitePool, owner_id: &str, item_id: &str) -> StyleResult<()> {
    if count_outfit_references(pool, item_id).await? > 0 {
        return Err(StyleError::Validation(format!(
            "Item {item_id} is used by a saved outfit"
        )));
    }

    let result = sqlx::query("DELETE FROM wardrobe_items WHERE owner_id = ? AND id = ?")
        .bind(owner_id)
        .bind(item_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(StyleError::NotFound(format!("Wardrobe item {item_id}")));
    }
    log::info!("Wardrobe item removed: {}", item_id);
    Ok(())
}

async fn count_outfit_references(pool: &SqlitePool, item_id: &str) -> Result<i64, sqlx::Error> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM saved_outfit_items WHERE item_id = ?")
        .bind(item_id)
        .fetch_one(pool)
        .await?;
    Ok(row.0)
}

#[cfg(test)]
#[path = "tests/wardrobe_repo_test.rs"]
mod tests;
