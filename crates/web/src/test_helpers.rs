//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use ovenline_app::{
    context::AppContext,
    domain::{
        carts::{MockCartsService, models::SessionId},
        catalog::{MockCatalogService, models::ProductId},
        kitchen::MockKitchenService,
        orders::{
            MockOrdersService,
            models::{Order, OrderId, OrderItem, OrderItemId},
            status::OrderStatus,
        },
        pricing::TaxRate,
    },
    images::MockImageGenerator,
};
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*,
    state::{ShopSettings, State},
    views::Views,
};

pub(crate) const TEST_SESSION: SessionId = SessionId::from_uuid(Uuid::nil());

#[salvo::handler]
pub(crate) async fn inject_session(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_session_id(TEST_SESSION);
    ctrl.call_next(req, depot, res).await;
}

fn strict_catalog() -> MockCatalogService {
    let mut catalog = MockCatalogService::new();

    catalog.expect_list_products().never();
    catalog.expect_get_product().never();
    catalog.expect_menu().never();

    catalog
}

fn strict_carts() -> MockCartsService {
    let mut carts = MockCartsService::new();

    carts.expect_add_item().never();
    carts.expect_clear().never();
    carts.expect_snapshot().never();
    carts.expect_prune_idle().never();

    carts
}

fn strict_orders() -> MockOrdersService {
    let mut orders = MockOrdersService::new();

    orders.expect_checkout().never();
    orders.expect_get_order().never();
    orders.expect_update_status().never();

    orders
}

fn strict_kitchen() -> MockKitchenService {
    let mut kitchen = MockKitchenService::new();

    kitchen.expect_active_tickets().never();
    kitchen.expect_recently_completed().never();
    kitchen.expect_feed().never();

    kitchen
}

fn strict_images() -> MockImageGenerator {
    let mut images = MockImageGenerator::new();

    images.expect_generate().never();

    images
}

/// Service mocks for one test; anything not replaced refuses every call.
pub(crate) struct Mocks {
    pub(crate) catalog: MockCatalogService,
    pub(crate) carts: MockCartsService,
    pub(crate) orders: MockOrdersService,
    pub(crate) kitchen: MockKitchenService,
    pub(crate) images: MockImageGenerator,
}

impl Default for Mocks {
    fn default() -> Self {
        Self {
            catalog: strict_catalog(),
            carts: strict_carts(),
            orders: strict_orders(),
            kitchen: strict_kitchen(),
            images: strict_images(),
        }
    }
}

pub(crate) fn state_with(mocks: Mocks) -> Arc<State> {
    let app = AppContext {
        catalog: Arc::new(mocks.catalog),
        carts: Arc::new(mocks.carts),
        orders: Arc::new(mocks.orders),
        kitchen: Arc::new(mocks.kitchen),
        images: Arc::new(mocks.images),
        tax_rate: TaxRate::default(),
    };

    match Views::new() {
        Ok(views) => State::shared(app, views, ShopSettings::default()),
        Err(error) => panic!("templates failed to parse: {error}"),
    }
}

/// A service with the given mocks, a fixed session and `route` mounted.
pub(crate) fn service(mocks: Mocks, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with(mocks)))
            .hoop(inject_session)
            .push(route),
    )
}

pub(crate) fn make_order(id: i64, status: OrderStatus, items: &[(&str, &str, u64)]) -> Order {
    let order_id = OrderId::from_i64(id);

    Order {
        id: order_id,
        customer_name: "Guest Customer".to_string(),
        total_amount: items.iter().map(|(_, _, price)| price).sum::<u64>() * 105 / 100,
        status,
        created_at: Timestamp::UNIX_EPOCH,
        items: items
            .iter()
            .zip(1..)
            .map(|((name, options, price), item_id)| OrderItem {
                id: OrderItemId::from_i64(item_id),
                order_id,
                product_id: Some(ProductId::from_i64(item_id)),
                product_name: (*name).to_string(),
                options: (*options).to_string(),
                price: *price,
            })
            .collect(),
    }
}
