use std::collections::HashSet;

use sqlx::SqlitePool;

use crate::database::models::{NewSavedOutfit, SavedOutfit, SavedOutfitRow};
use crate::types::errors::{StyleError, StyleResult};

// ── Saved outfits ───────────────────────────────────────────

/// Persist an outfit the user explicitly chose to keep.
///
/// Every item id must belong to `owner_id`; the check and the inserts run in
/// one transaction.
pub async fn save_outfit(
    pool: &SqlitePool,
    owner_id: &str,
    outfit: &NewSavedOutfit,
) -> StyleResult<SavedOutfit> {
    if outfit.clothing_item_ids.is_empty() {
        return Err(StyleError::Validation(
            "An outfit needs at least one item".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    if let Some(dup) = outfit
        .clothing_item_ids
        .iter()
        .find(|id| !seen.insert(id.as_str()))
    {
        return Err(StyleError::Validation(format!("Duplicate item id {dup}")));
    }

    let mut tx = pool.begin().await?;

    for item_id in &outfit.clothing_item_ids {
        let owned: Option<(String,)> =
            sqlx::query_as("SELECT id FROM wardrobe_items WHERE id = ? AND owner_id = ?")
                .bind(item_id)
                .bind(owner_id)
                .fetch_optional(&mut *tx)
                .await?;
        if owned.is_none() {
            return Err(StyleError::Validation(format!(
                "Item {item_id} does not belong to this wardrobe"
            )));
        }
    }

    let saved = SavedOutfit {
        id: uuid::Uuid::new_v4().to_string(),
        owner_id: owner_id.to_string(),
        name: outfit.name.clone(),
        clothing_item_ids: outfit.clothing_item_ids.clone(),
        styling_tips: outfit.styling_tips.clone(),
        occasion: outfit.occasion.clone(),
        time_of_day: outfit.time_of_day.clone(),
        weather: outfit.weather.clone(),
        saved_at: chrono::Utc::now().to_rfc3339(),
        image_url: outfit.image_url.clone(),
    };

    sqlx::query(
        "INSERT INTO saved_outfits (id, owner_id, name, styling_tips, occasion, time_of_day, weather, saved_at, image_url)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&saved.id)
    .bind(&saved.owner_id)
    .bind(&saved.name)
    .bind(&saved.styling_tips)
    .bind(&saved.occasion)
    .bind(&saved.time_of_day)
    .bind(&saved.weather)
    .bind(&saved.saved_at)
    .bind(&saved.image_url)
    .execute(&mut *tx)
    .await?;

    for (position, item_id) in saved.clothing_item_ids.iter().enumerate() {
        sqlx::query("INSERT INTO saved_outfit_items (outfit_id, item_id, position) VALUES (?, ?, ?)")
            .bind(&saved.id)
            .bind(item_id)
            .bind(position as i64)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;
    log::info!("Outfit saved: {} ({} items)", saved.name, saved.clothing_item_ids.len());
    Ok(saved)
}

/// Saved outfits of one owner, newest first, with item ids in saved order.
pub async fn list_saved_outfits(
    pool: &SqlitePool,
    owner_id: &str,
) -> Result<Vec<SavedOutfit>, sqlx::Error> {
    let rows = sqlx::query_as::<_, SavedOutfitRow>(
        "SELECT id, owner_id, name, styling_tips, occasion, time_of_day, weather, saved_at, image_url
         FROM saved_outfits WHERE owner_id = ? ORDER BY saved_at DESC, rowid DESC",
    )
    .bind(owner_id)
    .fetch_all(pool)
    .await?;

    let mut outfits = Vec::with_capacity(rows.len());
    for row in rows {
        let item_ids: Vec<(String,)> = sqlx::query_as(
            "SELECT item_id FROM saved_outfit_items WHERE outfit_id = ? ORDER BY position",
        )
        .bind(&row.id)
        .fetch_all(pool)
        .await?;

        outfits.push(SavedOutfit {
            id: row.id,
            owner_id: row.owner_id,
            name: row.name,
            clothing_item_ids: item_ids.into_iter().map(|r| r.0).collect(),
            styling_tips: row.styling_tips,
            occasion: row.occasion,
            time_of_day: row.time_of_day,
            weather: row.weather,
            saved_at: row.saved_at,
            image_url: row.image_url,
        });
    }

    Ok(outfits)
}

/// Delete a saved outfit (its item links cascade).
pub async fn delete_saved_outfit(
    pool: &SqlitePool,
    owner_id: &str,
    outfit_id: &str,
) -> StyleResult<()> {
    let mut tx = pool.begin().await?;

    sqlx::query(
        "DELETE FROM saved_outfit_items WHERE outfit_id IN
            (SELECT id FROM saved_outfits WHERE id = ? AND owner_id = ?)",
    )
    .bind(outfit_id)
    .bind(owner_id)
    .execute(&mut *tx)
    .await?;

    let result = sqlx::query("DELETE FROM saved_outfits WHERE id = ? AND owner_id = ?")
        .bind(outfit_id)
        .bind(owner_id)
        .execute(&mut *tx)
        .await?;

    if result.rows_affected() == 0 {
        return Err(StyleError::NotFound(format!("Saved outfit {outfit_id}")));
    }

    tx.commit().await?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/outfit_repo_test.rs"]
mod tests;
