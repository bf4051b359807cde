//! Order Confirmation Handler

use std::sync::Arc;

use salvo::{prelude::*, writing::Text};
use serde::Serialize;

use ovenline_app::domain::orders::models::{Order, OrderId};

use crate::{
    extensions::*,
    orders::errors::into_status_error,
    state::{ShopSettings, State},
};

#[derive(Debug, Serialize)]
struct ConfirmationView {
    order_id: i64,
    items: Vec<ConfirmationItemView>,
    total: String,
}

#[derive(Debug, Serialize)]
struct ConfirmationItemView {
    name: String,
    options: String,
    price: String,
}

impl ConfirmationView {
    fn new(order: Order, shop: &ShopSettings) -> Self {
        Self {
            order_id: order.id.into_i64(),
            total: shop.money(order.total_amount),
            items: order
                .items
                .into_iter()
                .map(|item| ConfirmationItemView {
                    price: shop.money(item.price),
                    name: item.product_name,
                    options: item.options,
                })
                .collect(),
        }
    }
}

/// Confirmation page shown after a successful checkout.
#[handler]
#[tracing::instrument(
    name = "orders.confirmation",
    skip(req, depot),
    fields(order_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Text<String>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let order = req
        .param::<i64>("id")
        .map(OrderId::from_i64)
        .ok_or_else(|| StatusError::bad_request().brief("invalid order id"))?;

    tracing::Span::current().record("order_id", tracing::field::display(order));

    let order = state
        .app
        .orders
        .get_order(order)
        .await
        .map_err(into_status_error)?;

    state
        .views
        .render("confirmation.html", &ConfirmationView::new(order, &state.shop))
}
