//! Outfit generation: garment heuristics, proposal validation, the
//! deterministic fallback generator and the external providers.

pub mod analysis;
pub mod core;
pub mod models;
pub mod pipeline;
pub mod provider;

pub use models::types::{
    GenerationRequest, GenerationResponse, Language, OutfitCandidate, OutfitSource,
};
pub use pipeline::generate::generate_outfits;
pub use provider::http::{HttpImageProvider, HttpOutfitProvider};
pub use provider::{DisabledImageProvider, GeneratedImage, ImageProvider, OutfitProvider};
