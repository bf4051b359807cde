//! Ordering Page Handler

use std::sync::Arc;

use salvo::{prelude::*, writing::Text};
use serde::Serialize;

use crate::{extensions::*, state::State};

#[derive(Debug, Serialize)]
struct HomeView<'a> {
    currency_symbol: &'a str,
}

/// Page shell; the menu and cart fragments load themselves.
#[handler]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Text<String>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state.views.render(
        "index.html",
        &HomeView {
            currency_symbol: &state.shop.currency_symbol,
        },
    )
}
