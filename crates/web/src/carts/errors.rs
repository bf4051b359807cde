//! Errors

use salvo::http::StatusError;
use tracing::error;

use ovenline_app::domain::carts::CartsServiceError;

pub(crate) fn into_status_error(error: CartsServiceError) -> StatusError {
    match error {
        CartsServiceError::ProductNotFound => StatusError::not_found().brief("Product not found"),
        CartsServiceError::SoldOut => StatusError::conflict().brief("Product is sold out"),
        CartsServiceError::OptionNotOffered(key) => {
            StatusError::bad_request().brief(format!("{key} is not available for this product"))
        }
        CartsServiceError::Catalog(source) => {
            error!("failed to look up product for cart: {source}");

            StatusError::internal_server_error()
        }
        CartsServiceError::Pricing(source) => {
            error!("failed to price cart: {source}");

            StatusError::internal_server_error()
        }
    }
}
