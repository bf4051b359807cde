//! Kitchen Status Handler

use std::sync::Arc;

use salvo::{prelude::*, writing::Text};
use tracing::{debug, info};

use ovenline_app::domain::orders::{models::OrderId, status::OrderStatus};

use crate::{
    extensions::*, kitchen::handlers::feed::render_feed, orders::errors::into_status_error,
    state::State,
};

/// Move an order to the requested status, then re-render the whole feed.
#[handler]
#[tracing::instrument(
    name = "kitchen.status",
    skip(req, depot),
    fields(
        order_id = tracing::field::Empty,
        status = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Text<String>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let order = req
        .query::<i64>("id")
        .map(OrderId::from_i64)
        .ok_or_else(|| StatusError::bad_request().brief("missing or invalid order id"))?;

    let status = req
        .query::<String>("status")
        .ok_or_else(|| StatusError::bad_request().brief("missing order status"))?
        .parse::<OrderStatus>()
        .or_400("unknown order status")?;

    let span = tracing::Span::current();

    span.record("order_id", tracing::field::display(order));
    span.record("status", tracing::field::display(status));

    let change = state
        .app
        .orders
        .update_status(order, status)
        .await
        .map_err(into_status_error)?;

    if change.is_noop() {
        debug!("order already {}", change.to);
    } else {
        info!(from = %change.from, to = %change.to, "order status changed");
    }

    render_feed(state).await
}
