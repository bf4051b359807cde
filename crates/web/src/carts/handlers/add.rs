//! Add To Cart Handler

use std::{str::FromStr, sync::Arc};

use salvo::{prelude::*, writing::Text};
use tracing::{debug, warn};

use ovenline_app::domain::{
    carts::{
        CartsServiceError,
        options::{OptionSelection, Sweetness, Temperature},
    },
    catalog::models::ProductId,
};

use crate::{
    carts::{errors::into_status_error, handlers::show::render_cart},
    extensions::*,
    state::State,
};

/// Parse the option fields of an "add to cart" form.
async fn option_selection(req: &mut Request) -> Result<OptionSelection, StatusError> {
    Ok(OptionSelection {
        extra_cheese: checked(req.form::<String>("extra_cheese").await),
        extra_topping: checked(req.form::<String>("extra_topping").await),
        extra_pasta: checked(req.form::<String>("extra_pasta").await),
        temperature: choice::<Temperature>(req.form::<String>("temp").await)
            .or_400("unknown temperature option")?,
        sweetness: choice::<Sweetness>(req.form::<String>("sweetness").await)
            .or_400("unknown sweetness option")?,
    })
}

fn checked(value: Option<String>) -> bool {
    value.is_some_and(|value| value == "on")
}

fn choice<T: FromStr>(value: Option<String>) -> Result<Option<T>, T::Err> {
    value
        .filter(|value| !value.trim().is_empty())
        .map(|value| value.trim().parse())
        .transpose()
}

/// Add a product with its selected options, then re-render the cart.
///
/// Unknown and sold out products leave the cart unchanged.
#[handler]
#[tracing::instrument(
    name = "carts.add",
    skip(req, depot),
    fields(
        session_id = tracing::field::Empty,
        product_id = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Text<String>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = depot.session_id_or_500()?;

    let product = req
        .query::<i64>("id")
        .map(ProductId::from_i64)
        .ok_or_else(|| StatusError::bad_request().brief("missing or invalid product id"))?;

    let span = tracing::Span::current();

    span.record("session_id", tracing::field::display(session));
    span.record("product_id", tracing::field::display(product));

    let options = option_selection(req).await?;

    match state.app.carts.add_item(session, product, options).await {
        Ok(line) => {
            debug!(line_total = line.line_total(), "added cart line");
        }
        Err(error @ (CartsServiceError::ProductNotFound | CartsServiceError::SoldOut)) => {
            warn!("cart add ignored: {error}");
        }
        Err(error) => return Err(into_status_error(error)),
    }

    render_cart(state, session).await
}
