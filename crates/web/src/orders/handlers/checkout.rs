//! Checkout Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, prelude::*};
use tracing::{info, warn};

use ovenline_app::domain::orders::OrdersServiceError;

use crate::{extensions::*, orders::errors::into_status_error, state::State};

/// Commit the session's cart as a paid order.
///
/// An empty cart sends the customer back to the ordering page.
#[handler]
#[tracing::instrument(
    name = "orders.checkout",
    skip(depot, res),
    fields(
        session_id = tracing::field::Empty,
        order_id = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(depot: &mut Depot, res: &mut Response) -> Result<(), StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = depot.session_id_or_500()?;

    let span = tracing::Span::current();

    span.record("session_id", tracing::field::display(session));

    let location = match state.app.orders.checkout(session).await {
        Ok(order) => {
            span.record("order_id", tracing::field::display(order));

            info!("order placed");

            format!("/orders/{order}/confirmation")
        }
        Err(OrdersServiceError::EmptyCart) => {
            warn!("checkout attempted with an empty cart");

            "/".to_string()
        }
        Err(error) => return Err(into_status_error(error)),
    };

    res.add_header(LOCATION, location, true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::SEE_OTHER);

    Ok(())
}
