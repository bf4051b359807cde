//! Show Cart Handler

use std::sync::Arc;

use salvo::{prelude::*, writing::Text};

use ovenline_app::domain::carts::models::SessionId;

use crate::{carts::errors::into_status_error, carts::view::CartView, extensions::*, state::State};

/// Render the session's cart fragment.
pub(crate) async fn render_cart(
    state: &State,
    session: SessionId,
) -> Result<Text<String>, StatusError> {
    let snapshot = state
        .app
        .carts
        .snapshot(session)
        .await
        .map_err(into_status_error)?;

    state.views.render(
        "cart.html",
        &CartView::new(&snapshot, state.app.tax_rate, &state.shop),
    )
}

/// Cart snapshot fragment.
#[handler]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Text<String>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = depot.session_id_or_500()?;

    render_cart(state, session).await
}
