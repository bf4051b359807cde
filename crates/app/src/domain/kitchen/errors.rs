//! Kitchen service errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum KitchenServiceError {
    #[error("kitchen window start is out of range")]
    Window(#[source] jiff::Error),

    #[error("storage error")]
    Sql(#[from] sqlx::Error),
}
