//! Session cookie middleware.
//!
//! Every visitor gets an opaque session id in an `HttpOnly` cookie; carts are
//! keyed by it. Missing or malformed cookies are replaced with a fresh id.

use ovenline_app::domain::carts::models::SessionId;
use salvo::{
    http::cookie::{Cookie, SameSite},
    prelude::*,
};
use tracing::debug;

use crate::extensions::*;

pub(crate) const SESSION_COOKIE: &str = "ovenline_session";

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let existing = req
        .cookie(SESSION_COOKIE)
        .and_then(|cookie| cookie.value().parse::<SessionId>().ok());

    let session = if let Some(session) = existing {
        session
    } else {
        let session = SessionId::new();

        debug!(session = %session, "issued session cookie");

        res.add_cookie(session_cookie(session));

        session
    };

    depot.insert_session_id(session);

    ctrl.call_next(req, depot, res).await;
}

fn session_cookie(session: SessionId) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, session.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;
    use uuid::Uuid;

    use super::*;

    #[salvo::handler]
    async fn echo_session(depot: &mut Depot, res: &mut Response) {
        let session = depot
            .session_id_or_500()
            .map_or_else(|_| "missing".to_string(), |session| session.to_string());

        res.render(session);
    }

    fn make_service() -> Service {
        Service::new(Router::new().hoop(handler).push(Router::new().get(echo_session)))
    }

    #[tokio::test]
    async fn test_first_visit_issues_cookie() -> TestResult {
        let mut res = TestClient::get("http://example.com/")
            .send(&make_service())
            .await;

        let cookie = res
            .cookie(SESSION_COOKIE)
            .ok_or("session cookie should be set")?
            .clone();

        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(res.take_string().await?, cookie.value());

        Ok(())
    }

    #[tokio::test]
    async fn test_existing_cookie_is_reused() -> TestResult {
        let session = Uuid::now_v7();

        let mut res = TestClient::get("http://example.com/")
            .add_header("cookie", format!("{SESSION_COOKIE}={session}"), true)
            .send(&make_service())
            .await;

        assert!(res.cookie(SESSION_COOKIE).is_none());
        assert_eq!(res.take_string().await?, session.to_string());

        Ok(())
    }

    #[tokio::test]
    async fn test_malformed_cookie_is_replaced() -> TestResult {
        let mut res = TestClient::get("http://example.com/")
            .add_header("cookie", format!("{SESSION_COOKIE}=not-a-uuid"), true)
            .send(&make_service())
            .await;

        let cookie = res
            .cookie(SESSION_COOKIE)
            .ok_or("replacement cookie should be set")?
            .clone();

        assert_ne!(cookie.value(), "not-a-uuid");
        assert_eq!(res.take_string().await?, cookie.value());

        Ok(())
    }
}
