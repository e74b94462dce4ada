//! Seams to the external text and image generation services.
//!
//! The pipeline is generic over these traits so tests can substitute stubs
//! and callers can plug in any OpenAI-compatible backend.

pub mod http;

use serde::{Deserialize, Serialize};

use crate::types::errors::ProviderError;

/// An image produced for one outfit: a URL or a `data:` URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedImage {
    pub reference: String,
}

/// Large-language-model text generation.
#[allow(async_fn_in_trait)]
pub trait OutfitProvider {
    /// Send the prompt and return the raw model text.
    async fn suggest(&self, prompt: &str) -> Result<String, ProviderError>;
}

/// Image generation from a textual outfit description.
#[allow(async_fn_in_trait)]
pub trait ImageProvider {
    async fn render(&self, description: &str) -> Result<GeneratedImage, ProviderError>;
}

/// Image provider used when image generation is switched off.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledImageProvider;

impl ImageProvider for DisabledImageProvider {
    async fn render(&self, _description: &str) -> Result<GeneratedImage, ProviderError> {
        Err(ProviderError::NotConfigured(
            "image generation is disabled".to_string(),
        ))
    }
}
