//! OpenAI-compatible HTTP providers (chat completions and image generation).

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{GeneratedImage, ImageProvider, OutfitProvider};
use crate::services::config::StylistSettings;
use crate::types::errors::ProviderError;

const CHAT_TEMPERATURE: f32 = 0.7;
const SYSTEM_PROMPT: &str =
    "You are a fashion stylist. Answer with JSON only, without commentary.";
const IMAGE_SIZE: &str = "1024x1024";
/// Response bodies longer than this are cut in error messages.
const MAX_ERROR_BODY: usize = 500;

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Deserialize)]
pub(crate) struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Deserialize)]
struct ChatMessageResponse {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Serialize)]
struct ImageRequest {
    model: String,
    prompt: String,
    n: u8,
    size: String,
}

#[derive(Deserialize)]
pub(crate) struct ImageResponse {
    #[serde(default)]
    data: Vec<ImageDatum>,
}

#[derive(Deserialize)]
struct ImageDatum {
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    b64_json: Option<String>,
}

fn build_client(settings: &StylistSettings) -> Result<Client, ProviderError> {
    Ok(Client::builder()
        .timeout(Duration::from_secs(settings.timeout_secs))
        .build()?)
}

fn require_key(api_key: &Option<String>) -> Result<&str, ProviderError> {
    api_key
        .as_deref()
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .ok_or_else(|| ProviderError::NotConfigured("STYLESPACE_API_KEY is not set".to_string()))
}

async fn post_json<T: Serialize>(
    client: &Client,
    url: &str,
    api_key: &str,
    payload: &T,
) -> Result<reqwest::Response, ProviderError> {
    let res = client
        .post(url)
        .header("Authorization", format!("Bearer {}", api_key))
        .header("Content-Type", "application/json")
        .json(payload)
        .send()
        .await?;

    if !res.status().is_success() {
        let status = res.status().as_u16();
        let mut body = res.text().await.unwrap_or_default();
        if body.len() > MAX_ERROR_BODY {
            let cut = (0..=MAX_ERROR_BODY)
                .rev()
                .find(|i| body.is_char_boundary(*i))
                .unwrap_or(0);
            body.truncate(cut);
        }
        return Err(ProviderError::Status { status, body });
    }
    Ok(res)
}

/// First non-empty message content of a chat completion.
pub(crate) fn chat_content(response: ChatResponse) -> Result<String, ProviderError> {
    response
        .choices
        .into_iter()
        .find_map(|choice| choice.message.content.filter(|c| !c.trim().is_empty()))
        .ok_or(ProviderError::EmptyResponse)
}

/// Image reference from an images response: the hosted URL, or inline
/// base64 data wrapped as a `data:` URL.
pub(crate) fn image_reference(response: ImageResponse) -> Result<GeneratedImage, ProviderError> {
    let datum = response
        .data
        .into_iter()
        .next()
        .ok_or(ProviderError::EmptyResponse)?;

    if let Some(url) = datum.url.filter(|u| !u.trim().is_empty()) {
        return Ok(GeneratedImage { reference: url });
    }
    match datum.b64_json.filter(|b| !b.trim().is_empty()) {
        Some(b64) => Ok(GeneratedImage {
            reference: format!("data:image/png;base64,{}", b64),
        }),
        None => Err(ProviderError::Decode(
            "image response has neither url nor b64_json".to_string(),
        )),
    }
}

/// Chat-completions text provider.
pub struct HttpOutfitProvider {
    client: Client,
    api_key: Option<String>,
    url: String,
    model: String,
}

impl HttpOutfitProvider {
    pub fn from_settings(settings: &StylistSettings) -> Result<Self, ProviderError> {
        Ok(Self {
            client: build_client(settings)?,
            api_key: settings.api_key.clone(),
            url: settings.chat_url.clone(),
            model: settings.chat_model.clone(),
        })
    }
}

impl OutfitProvider for HttpOutfitProvider {
    async fn suggest(&self, prompt: &str) -> Result<String, ProviderError> {
        let api_key = require_key(&self.api_key)?;
        let payload = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompt.to_string(),
                },
            ],
            temperature: CHAT_TEMPERATURE,
        };

        log::debug!("Requesting outfits from {} ({})", self.url, self.model);
        let res = post_json(&self.client, &self.url, api_key, &payload).await?;
        let chat: ChatResponse = res
            .json()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))?;
        chat_content(chat)
    }
}

/// Images-generation provider.
pub struct HttpImageProvider {
    client: Client,
    api_key: Option<String>,
    url: String,
    model: String,
}

impl HttpImageProvider {
    pub fn from_settings(settings: &StylistSettings) -> Result<Self, ProviderError> {
        Ok(Self {
            client: build_client(settings)?,
            api_key: settings.api_key.clone(),
            url: settings.image_url.clone(),
            model: settings.image_model.clone(),
        })
    }
}

impl ImageProvider for HttpImageProvider {
    async fn render(&self, description: &str) -> Result<GeneratedImage, ProviderError> {
        let api_key = require_key(&self.api_key)?;
        let payload = ImageRequest {
            model: self.model.clone(),
            prompt: description.to_string(),
            n: 1,
            size: IMAGE_SIZE.to_string(),
        };

        let res = post_json(&self.client, &self.url, api_key, &payload).await?;
        let images: ImageResponse = res
            .json()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))?;
        image_reference(images)
    }
}

#[cfg(test)]
#[path = "../tests/provider/http_tests.rs"]
mod tests;
