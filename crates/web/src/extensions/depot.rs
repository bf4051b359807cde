//! Depot helper extensions.

use std::any::Any;

use ovenline_app::domain::carts::models::SessionId;
use salvo::prelude::{Depot, StatusError};
use tracing::error;

const SESSION_ID_DEPOT_KEY: &str = "session_id";

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    fn insert_session_id(&mut self, session: SessionId);

    fn session_id_or_500(&self) -> Result<SessionId, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn insert_session_id(&mut self, session: SessionId) {
        self.insert(SESSION_ID_DEPOT_KEY, session);
    }

    fn session_id_or_500(&self) -> Result<SessionId, StatusError> {
        self.get::<SessionId>(SESSION_ID_DEPOT_KEY)
            .copied()
            .map_err(|_ignored| {
                error!("session middleware did not run before a cart handler");

                StatusError::internal_server_error()
            })
    }
}
