//! Carts service errors.

use thiserror::Error;

use crate::domain::{
    carts::options::OptionKey, catalog::CatalogServiceError, pricing::PricingError,
};

#[derive(Debug, Error)]
pub enum CartsServiceError {
    #[error("product not found")]
    ProductNotFound,

    #[error("product is sold out")]
    SoldOut,

    #[error("option {0} is not offered for this product")]
    OptionNotOffered(OptionKey),

    #[error("catalog lookup failed")]
    Catalog(#[source] CatalogServiceError),

    #[error(transparent)]
    Pricing(#[from] PricingError),
}

impl From<CatalogServiceError> for CartsServiceError {
    fn from(error: CatalogServiceError) -> Self {
        match error {
            CatalogServiceError::NotFound => Self::ProductNotFound,
            other => Self::Catalog(other),
        }
    }
}
