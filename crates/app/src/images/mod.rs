//! Product image generation.

mod errors;
mod http;

pub use errors::ImageGenerationError;
pub use http::{HttpImageGenerator, ImageGeneratorConfig};

use async_trait::async_trait;
use mockall::automock;

/// A generated image saved under the public image directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    /// Path the web server serves the image from, e.g. `/images/ai_1700000000_margherita.png`.
    pub public_path: String,
}

#[automock]
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Generate an image for `prompt` and store it.
    async fn generate(&self, prompt: &str) -> Result<GeneratedImage, ImageGenerationError>;
}

/// Stand-in used when no image API has been configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredImageGenerator;

#[async_trait]
impl ImageGenerator for UnconfiguredImageGenerator {
    async fn generate(&self, _prompt: &str) -> Result<GeneratedImage, ImageGenerationError> {
        Err(ImageGenerationError::NotConfigured)
    }
}
