//! Image Generation Config

use std::{path::PathBuf, time::Duration};

use clap::Args;
use ovenline_app::images::ImageGeneratorConfig;

/// Public URL prefix generated and seed images are served under.
pub(crate) const IMAGES_PUBLIC_PREFIX: &str = "/images";

/// Image generation provider settings.
#[derive(Debug, Args)]
pub struct ImagesConfig {
    /// Image generation endpoint; generation is disabled when unset
    #[arg(long, env = "IMAGE_API_URL")]
    pub image_api_url: Option<String>,

    /// Bearer key for the image generation endpoint
    #[arg(long, env = "IMAGE_API_KEY", hide_env_values = true)]
    pub image_api_key: Option<String>,

    /// Directory images are stored in and served from
    #[arg(long, env = "IMAGE_DIR", default_value = "./static/images")]
    pub image_dir: PathBuf,

    /// Requested image size
    #[arg(long, env = "IMAGE_SIZE", default_value = "512x512")]
    pub image_size: String,

    /// Seconds to wait for the provider before giving up
    #[arg(long, env = "IMAGE_TIMEOUT_SECS", default_value_t = 30)]
    pub image_timeout_secs: u64,
}

impl ImagesConfig {
    /// Generator settings, or `None` when no endpoint and key are configured.
    #[must_use]
    pub fn generator_config(&self) -> Option<ImageGeneratorConfig> {
        let endpoint = self.image_api_url.as_ref().filter(|url| !url.trim().is_empty())?;
        let api_key = self.image_api_key.as_ref().filter(|key| !key.trim().is_empty())?;

        Some(ImageGeneratorConfig {
            endpoint: endpoint.clone(),
            api_key: api_key.clone(),
            size: self.image_size.clone(),
            image_dir: self.image_dir.clone(),
            public_prefix: IMAGES_PUBLIC_PREFIX.to_string(),
            timeout: Duration::from_secs(self.image_timeout_secs),
        })
    }
}
