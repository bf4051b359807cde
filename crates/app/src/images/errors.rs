//! Image generation errors.

use std::io;

use thiserror::Error;

/// Errors that can occur while generating an image.
#[derive(Debug, Error)]
pub enum ImageGenerationError {
    /// The provider did not answer within the configured timeout.
    #[error("image provider timed out")]
    Timeout,

    /// No provider endpoint or key has been configured.
    #[error("image generation is not configured")]
    NotConfigured,

    /// The prompt was blank.
    #[error("prompt cannot be empty")]
    EmptyPrompt,

    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[source] reqwest::Error),

    /// The provider returned a non-2xx response.
    #[error("unexpected response from image provider: {0}")]
    UnexpectedResponse(String),

    /// The provider answered without any image payload.
    #[error("image provider returned no image data")]
    NoImageData,

    /// The image payload was not valid base64.
    #[error("could not decode image payload: {0}")]
    Decode(#[from] base64::DecodeError),

    /// Writing the image to disk failed.
    #[error("could not store image: {0}")]
    Io(#[from] io::Error),
}

impl From<reqwest::Error> for ImageGenerationError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            return Self::Timeout;
        }

        Self::Http(error)
    }
}
