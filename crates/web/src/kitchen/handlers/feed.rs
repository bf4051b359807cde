//! Kitchen Feed Handler

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{prelude::*, writing::Text};
use tracing::error;

use crate::{extensions::*, kitchen::view::FeedView, state::State};

/// Render active and recently completed tickets.
///
/// A failed read renders the unavailable notice with 200 so polling continues.
pub(crate) async fn render_feed(state: &State) -> Result<Text<String>, StatusError> {
    let now = Timestamp::now();

    let view = match state.app.kitchen.feed(now).await {
        Ok(feed) => FeedView::new(feed, now),
        Err(error) => {
            error!("failed to read kitchen feed: {error}");

            FeedView::unavailable()
        }
    };

    state.views.render("kitchen_feed.html", &view)
}

/// Kitchen feed fragment polled by the kitchen page.
#[handler]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Text<String>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    render_feed(state).await
}
