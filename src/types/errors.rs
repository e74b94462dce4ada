use serde::Serialize;
use thiserror::Error;

/// Minimum number of usable wardrobe items before outfits can be generated.
pub const MIN_WARDROBE_ITEMS: usize = 2;

#[derive(Debug, Error)]
pub enum StyleError {
    #[error("Add at least {MIN_WARDROBE_ITEMS} items to your wardrobe to get outfit ideas (found {available})")]
    InsufficientWardrobe { available: usize },
    #[error("Database error: {0}")]
    Database(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<sqlx::Error> for StyleError {
    fn from(error: sqlx::Error) -> Self {
        StyleError::Database(error.to_string())
    }
}

impl From<sqlx::migrate::MigrateError> for StyleError {
    fn from(error: sqlx::migrate::MigrateError) -> Self {
        StyleError::Database(error.to_string())
    }
}

impl Serialize for StyleError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}

pub type StyleResult<T> = Result<T, StyleError>;

/// Failures reported by the external text/image generation services.
///
/// These never reach the caller of the outfit pipeline: every variant is
/// absorbed and routed to the fallback generator or to reference images.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),
    #[error("HTTP request failed: {0}")]
    Http(String),
    #[error("API error {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Empty response from provider")]
    EmptyResponse,
    #[error("Failed to decode provider response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(error: reqwest::Error) -> Self {
        ProviderError::Http(error.to_string())
    }
}

#[cfg(test)]
#[path = "tests/errors_tests.rs"]
mod tests;
