use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::services::stylist::models::types::Language;

pub const DEFAULT_CHAT_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_CHAT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_IMAGE_URL: &str = "https://api.openai.com/v1/images/generations";
pub const DEFAULT_IMAGE_MODEL: &str = "gpt-image-1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_OUTFIT_COUNT: usize = 3;
/// Extra outfits requested for premium users.
pub const PREMIUM_EXTRA_OUTFITS: usize = 2;
pub const MIN_OUTFIT_COUNT: usize = 1;
pub const MAX_OUTFIT_COUNT: usize = 6;

/// Setting keys, shared by the environment (`STYLESPACE_` + upper-case key)
/// and the `app_settings` table.
pub const KEY_API_KEY: &str = "api_key";
pub const KEY_CHAT_URL: &str = "chat_url";
pub const KEY_CHAT_MODEL: &str = "chat_model";
pub const KEY_IMAGE_URL: &str = "image_url";
pub const KEY_IMAGE_MODEL: &str = "image_model";
pub const KEY_TIMEOUT_SECS: &str = "timeout_secs";
pub const KEY_OUTFIT_COUNT: &str = "outfit_count";
pub const KEY_LANGUAGE: &str = "language";
pub const KEY_IMAGE_GENERATION: &str = "image_generation";

pub const ALL_KEYS: &[&str] = &[
    KEY_API_KEY,
    KEY_CHAT_URL,
    KEY_CHAT_MODEL,
    KEY_IMAGE_URL,
    KEY_IMAGE_MODEL,
    KEY_TIMEOUT_SECS,
    KEY_OUTFIT_COUNT,
    KEY_LANGUAGE,
    KEY_IMAGE_GENERATION,
];

const ENV_PREFIX: &str = "STYLESPACE_";

/// Runtime configuration of the outfit pipeline and its providers.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StylistSettings {
    pub api_key: Option<String>,
    pub chat_url: String,
    pub chat_model: String,
    pub image_url: String,
    pub image_model: String,
    pub timeout_secs: u64,
    /// Outfits requested for free users; premium users get more.
    pub outfit_count: usize,
    pub language: Language,
    pub image_generation: bool,
}

impl Default for StylistSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            chat_url: DEFAULT_CHAT_URL.into(),
            chat_model: DEFAULT_CHAT_MODEL.into(),
            image_url: DEFAULT_IMAGE_URL.into(),
            image_model: DEFAULT_IMAGE_MODEL.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            outfit_count: DEFAULT_OUTFIT_COUNT,
            language: Language::English,
            image_generation: true,
        }
    }
}

pub fn env_var_name(key: &str) -> String {
    format!("{}{}", ENV_PREFIX, key.to_uppercase())
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl StylistSettings {
    /// Build settings from a key lookup; missing or invalid values keep the
    /// defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let values: HashMap<String, String> = ALL_KEYS
            .iter()
            .filter_map(|key| lookup(key).map(|value| (key.to_string(), value)))
            .collect();
        let mut settings = Self::default();
        settings.apply_overrides(&values);
        settings
    }

    /// Overwrite fields from key/value pairs (e.g. the `app_settings` table).
    pub fn apply_overrides(&mut self, values: &HashMap<String, String>) {
        for (key, raw) in values {
            let value = raw.trim();
            if value.is_empty() {
                continue;
            }

            match key.as_str() {
                KEY_API_KEY => self.api_key = Some(value.to_string()),
                KEY_CHAT_URL => self.chat_url = value.to_string(),
                KEY_CHAT_MODEL => self.chat_model = value.to_string(),
                KEY_IMAGE_URL => self.image_url = value.to_string(),
                KEY_IMAGE_MODEL => self.image_model = value.to_string(),
                KEY_TIMEOUT_SECS => match value.parse::<u64>() {
                    Ok(secs) if secs > 0 => self.timeout_secs = secs,
                    _ => log::warn!("Ignoring invalid {key} '{value}'"),
                },
                KEY_OUTFIT_COUNT => match value.parse::<usize>() {
                    Ok(count) => {
                        self.outfit_count = count.clamp(MIN_OUTFIT_COUNT, MAX_OUTFIT_COUNT)
                    }
                    Err(_) => log::warn!("Ignoring invalid {key} '{value}'"),
                },
                KEY_LANGUAGE => self.language = Language::from_code(value),
                KEY_IMAGE_GENERATION => match parse_bool(value) {
                    Some(enabled) => self.image_generation = enabled,
                    None => log::warn!("Ignoring invalid {key} '{value}'"),
                },
                _ => {}
            }
        }
    }

    /// Key/value form, for persisting into `app_settings`. The API key is
    /// left out.
    pub fn to_values(&self) -> Vec<(&'static str, String)> {
        vec![
            (KEY_CHAT_URL, self.chat_url.clone()),
            (KEY_CHAT_MODEL, self.chat_model.clone()),
            (KEY_IMAGE_URL, self.image_url.clone()),
            (KEY_IMAGE_MODEL, self.image_model.clone()),
            (KEY_TIMEOUT_SECS, self.timeout_secs.to_string()),
            (KEY_OUTFIT_COUNT, self.outfit_count.to_string()),
            (KEY_LANGUAGE, self.language.code().to_string()),
            (KEY_IMAGE_GENERATION, self.image_generation.to_string()),
        ]
    }

    /// Number of outfits to request for one invocation.
    pub fn outfit_count_for(&self, is_premium: bool) -> usize {
        let count = if is_premium {
            self.outfit_count + PREMIUM_EXTRA_OUTFITS
        } else {
            self.outfit_count
        };
        count.clamp(MIN_OUTFIT_COUNT, MAX_OUTFIT_COUNT)
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|key| !key.trim().is_empty())
    }
}
