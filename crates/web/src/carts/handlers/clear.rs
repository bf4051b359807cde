//! Clear Cart Handler

use std::sync::Arc;

use salvo::{prelude::*, writing::Text};
use tracing::debug;

use ovenline_app::domain::carts::models::CartSnapshot;

use crate::{carts::errors::into_status_error, carts::view::CartView, extensions::*, state::State};

/// Empty the session's cart and render the empty state.
#[handler]
#[tracing::instrument(
    name = "carts.clear",
    skip(depot),
    fields(session_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Text<String>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = depot.session_id_or_500()?;

    tracing::Span::current().record("session_id", tracing::field::display(session));

    state
        .app
        .carts
        .clear(session)
        .await
        .map_err(into_status_error)?;

    debug!("cleared cart");

    state.views.render(
        "cart.html",
        &CartView::new(&CartSnapshot::default(), state.app.tax_rate, &state.shop),
    )
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use ovenline_app::domain::carts::MockCartsService;

    use crate::test_helpers::{Mocks, TEST_SESSION, service};

    use super::*;

    #[tokio::test]
    async fn test_clear_renders_empty_cart() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_clear()
            .once()
            .withf(|session| *session == TEST_SESSION)
            .return_once(|_| Ok(()));
        carts.expect_add_item().never();
        carts.expect_snapshot().never();

        let mut res = TestClient::post("http://example.com/cart/clear")
            .send(&service(
                Mocks {
                    carts,
                    ..Mocks::default()
                },
                Router::with_path("cart/clear").post(handler),
            ))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(res.take_string().await?.contains("Your cart is empty."));

        Ok(())
    }
}
