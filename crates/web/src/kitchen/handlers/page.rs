//! Kitchen Page Handler

use std::sync::Arc;

use salvo::{prelude::*, writing::Text};
use serde::Serialize;

use crate::{extensions::*, state::State};

#[derive(Debug, Serialize)]
struct KitchenPageView {
    poll_interval_secs: u64,
}

/// Kitchen display shell; its script polls the feed fragment.
#[handler]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Text<String>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state.views.render(
        "kitchen.html",
        &KitchenPageView {
            poll_interval_secs: state.shop.poll_interval_secs,
        },
    )
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crate::test_helpers::{Mocks, service};

    use super::*;

    #[tokio::test]
    async fn test_page_carries_poll_interval() -> TestResult {
        let mut res = TestClient::get("http://example.com/kitchen")
            .send(&service(
                Mocks::default(),
                Router::with_path("kitchen").get(handler),
            ))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let html = res.take_string().await?;

        assert!(html.contains(r#"data-poll-secs="5""#), "{html}");

        Ok(())
    }

    #[tokio::test]
    async fn test_poller_keeps_board_on_error_and_skips_overlapping_polls() -> TestResult {
        let mut res = TestClient::get("http://example.com/kitchen")
            .send(&service(
                Mocks::default(),
                Router::with_path("kitchen").get(handler),
            ))
            .await;

        let html = res.take_string().await?;

        let guard = html.find("if (!res.ok)").ok_or("no response status check")?;
        let swap = html.find("swap(await res.text())").ok_or("no feed swap")?;

        assert!(guard < swap, "status must be checked before swapping the feed");
        assert!(html.contains("if (polling) { return; }"), "{html}");
        assert!(html.contains("polling = false;"), "{html}");

        Ok(())
    }
}
