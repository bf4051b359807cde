//! Errors

use salvo::http::StatusCode;
use tracing::{error, warn};

use ovenline_app::images::ImageGenerationError;

/// Status for a failed generation; the error fragment is rendered with it.
pub(crate) fn status_code(error: &ImageGenerationError) -> StatusCode {
    match error {
        ImageGenerationError::Timeout => {
            warn!("image provider timed out");

            StatusCode::GATEWAY_TIMEOUT
        }
        ImageGenerationError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
        ImageGenerationError::EmptyPrompt => StatusCode::BAD_REQUEST,
        ImageGenerationError::Io(source) => {
            error!("failed to store generated image: {source}");

            StatusCode::BAD_GATEWAY
        }
        other => {
            error!("image generation failed: {other}");

            StatusCode::BAD_GATEWAY
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_generation_errors_to_statuses() {
        assert_eq!(
            status_code(&ImageGenerationError::Timeout),
            StatusCode::GATEWAY_TIMEOUT
        );
        assert_eq!(
            status_code(&ImageGenerationError::NotConfigured),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            status_code(&ImageGenerationError::EmptyPrompt),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_code(&ImageGenerationError::NoImageData),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            status_code(&ImageGenerationError::UnexpectedResponse("500".to_string())),
            StatusCode::BAD_GATEWAY
        );
    }
}
