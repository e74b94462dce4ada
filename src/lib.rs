pub mod database;
pub mod services;
pub mod types;
#[cfg(test)]
pub mod test_utils;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;

pub use database::models::{NewSavedOutfit, SavedOutfit, WardrobeItem};
pub use services::config::{load_settings, save_settings, settings_from_env, StylistSettings};
pub use services::stylist::{
    generate_outfits, DisabledImageProvider, GeneratedImage, GenerationRequest,
    GenerationResponse, HttpImageProvider, HttpOutfitProvider, ImageProvider, Language,
    OutfitCandidate, OutfitProvider, OutfitSource,
};
pub use types::errors::{ProviderError, StyleError, StyleResult};

/// Open (creating if needed) the SQLite database at `path` and run the
/// embedded migrations.
pub async fn connect_database(path: &Path) -> StyleResult<SqlitePool> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)
                .map_err(|e| {
                    StyleError::Database(format!("Cannot create {}: {e}", parent.display()))
                })?;
        }
    }

    let opts = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(opts)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;
    log::info!("Database ready at {}", path.display());
    Ok(pool)
}
