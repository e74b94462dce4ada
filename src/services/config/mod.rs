pub mod models;

pub use models::*;

use crate::database::settings_repo;
use crate::types::errors::StyleResult;
use sqlx::SqlitePool;

/// Settings from the process environment, after loading a `.env` file when
/// one exists.
pub fn settings_from_env() -> StylistSettings {
    if let Err(e) = dotenvy::dotenv() {
        log::debug!("No .env file loaded: {e}");
    }
    StylistSettings::from_lookup(|key| std::env::var(env_var_name(key)).ok())
}

/// Environment settings overridden by the `app_settings` table.
///
/// A database failure is logged and the environment settings are used as-is.
pub async fn load_settings(pool: &SqlitePool) -> StylistSettings {
    let mut settings = settings_from_env();
    match settings_repo::get_all_settings(pool).await {
        Ok(kv) => settings.apply_overrides(&kv),
        Err(e) => log::error!("Failed to load settings from DB: {e}"),
    }
    settings
}

/// Persist settings (without the API key) into `app_settings`.
pub async fn save_settings(pool: &SqlitePool, settings: &StylistSettings) -> StyleResult<()> {
    for (key, value) in settings.to_values() {
        settings_repo::set_setting(pool, key, &value).await?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
