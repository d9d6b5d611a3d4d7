//! Image service trait definition

use async_trait::async_trait;

use super::error::GenerationResult;

/// One image generation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    pub prompt: String,
    /// e.g. "16:9"
    pub aspect_ratio: String,
    /// Resolution tier, e.g. "4K"
    pub image_size: String,
}

/// An image produced by a service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    /// Remote URL or `data:` URI
    pub image_url: String,
    /// True when no real generation took place
    pub simulated: bool,
}

/// Image-generation backend
///
/// Implementations:
/// - `SimulatedImageService`: waits, then returns a placeholder
/// - `GeminiImageService`: one POST to the remote `generateContent` endpoint
#[async_trait]
pub trait ImageService: Send + Sync {
    /// Backend name, for logs
    fn name(&self) -> &str;

    async fn generate_image(&self, request: &ImageRequest) -> GenerationResult<GeneratedImage>;
}
