//! Generate Image Handler

use std::sync::Arc;

use salvo::{prelude::*, writing::Text};
use serde::Serialize;
use tracing::info;

use crate::{extensions::*, images::errors::status_code, state::State};

#[derive(Debug, Default, Serialize)]
struct ImageResultView {
    image_path: Option<String>,
    prompt: String,
    status: u16,
    message: String,
}

/// Generate a product image from the admin form's `prompt`.
///
/// Failures render the error fragment with a matching status; the catalog is never touched.
#[handler]
#[tracing::instrument(name = "images.generate", skip(req, depot, res), err)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Text<String>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let prompt = req
        .form::<String>("prompt")
        .await
        .ok_or_else(|| StatusError::bad_request().brief("missing prompt"))?;

    let view = match state.app.images.generate(&prompt).await {
        Ok(image) => {
            info!(path = %image.public_path, "generated image");

            ImageResultView {
                image_path: Some(image.public_path),
                prompt,
                ..ImageResultView::default()
            }
        }
        Err(error) => {
            let status = status_code(&error);

            res.status_code(status);

            ImageResultView {
                prompt,
                status: status.as_u16(),
                message: error.to_string(),
                ..ImageResultView::default()
            }
        }
    };

    state.views.render("image_result.html", &view)
}
