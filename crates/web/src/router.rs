//! App Router

use std::path::PathBuf;

use salvo::{Router, catch_panic::CatchPanic, serve_static::StaticDir, trailing_slash::remove_slash};

use crate::{
    carts, healthcheck, images, kitchen, observability::request_logging, orders, session, shop,
};

/// Every route the server answers; state is injected by the caller.
pub(crate) fn app_router(image_dir: PathBuf) -> Router {
    Router::new()
        .hoop(request_logging)
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("images/{**path}").get(StaticDir::new([image_dir])))
        .push(Router::with_path("menu").get(shop::menu::handler))
        .push(Router::with_path("orders/{id}/confirmation").get(orders::confirmation::handler))
        .push(
            Router::with_path("kitchen")
                .get(kitchen::page::handler)
                .push(Router::with_path("orders").get(kitchen::feed::handler))
                .push(Router::with_path("status").post(kitchen::status::handler)),
        )
        .push(Router::with_path("admin/images").post(images::generate::handler))
        .push(
            Router::new()
                .hoop(session::handler)
                .get(shop::home::handler)
                .push(
                    Router::with_path("cart")
                        .get(carts::show::handler)
                        .push(Router::with_path("add").post(carts::add::handler))
                        .push(Router::with_path("clear").post(carts::clear::handler)),
                )
                .push(Router::with_path("checkout").post(orders::checkout::handler)),
        )
}
