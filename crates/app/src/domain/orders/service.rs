//! Orders service.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::{
        carts::{models::SessionId, store::CartStore},
        orders::{
            errors::OrdersServiceError,
            models::{NewOrderItem, Order, OrderId, attach_items},
            repository::PgOrdersRepository,
            status::{OrderStatus, StatusChange},
        },
        pricing::TaxRate,
    },
};

/// Customer name recorded when checkout does not supply one.
pub const DEFAULT_CUSTOMER_NAME: &str = "Guest Customer";

#[derive(Debug, Clone)]
pub struct PgOrdersService {
    db: Db,
    repository: PgOrdersRepository,
    carts: Arc<CartStore>,
    tax_rate: TaxRate,
    customer_name: String,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(db: Db, carts: Arc<CartStore>, tax_rate: TaxRate, customer_name: String) -> Self {
        Self {
            db,
            repository: PgOrdersRepository::new(),
            carts,
            tax_rate,
            customer_name,
        }
    }
}

#[async_trait]
impl OrdersService for PgOrdersService {
    async fn checkout(&self, session: SessionId) -> Result<OrderId, OrdersServiceError> {
        let Some(cart) = self.carts.existing(session).await else {
            return Err(OrdersServiceError::EmptyCart);
        };

        // Held until commit so the cart cannot change underneath the order.
        let mut cart = cart.lock().await;

        if cart.is_empty() {
            return Err(OrdersServiceError::EmptyCart);
        }

        let totals = cart.totals(self.tax_rate)?;

        let mut tx = self.db.begin().await?;

        let order = self
            .repository
            .create_order(&mut tx, &self.customer_name, totals.total)
            .await?;

        for line in cart.lines() {
            self.repository
                .create_order_item(&mut tx, order, &NewOrderItem::from(line))
                .await?;
        }

        tx.commit().await?;

        let lines = cart.lines().len();

        cart.clear(Timestamp::now());

        info!(%order, %session, lines, total = totals.total, "order placed");

        Ok(order)
    }

    async fn get_order(&self, order: OrderId) -> Result<Order, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let mut found = self.repository.get_order(&mut tx, order).await?;
        let items = self.repository.list_order_items(&mut tx, &[order]).await?;

        tx.commit().await?;

        attach_items(std::slice::from_mut(&mut found), items);

        Ok(found)
    }

    async fn update_status(
        &self,
        order: OrderId,
        status: OrderStatus,
    ) -> Result<StatusChange, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let current = self.repository.lock_order_status(&mut tx, order).await?;

        let change = StatusChange {
            from: current,
            to: status,
        };

        if change.is_noop() {
            tx.commit().await?;

            return Ok(change);
        }

        let rows_affected = self
            .repository
            .update_order_status(&mut tx, order, status)
            .await?;

        if rows_affected == 0 {
            return Err(OrdersServiceError::NotFound);
        }

        tx.commit().await?;

        info!(%order, from = %current, to = %status, "order status changed");

        Ok(change)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Turn the session's cart into a persisted `Paid` order and empty the cart.
    ///
    /// An empty cart is refused with [`OrdersServiceError::EmptyCart`]. Any
    /// storage failure rolls the whole order back and leaves the cart intact.
    async fn checkout(&self, session: SessionId) -> Result<OrderId, OrdersServiceError>;

    /// Retrieve an order with its items.
    async fn get_order(&self, order: OrderId) -> Result<Order, OrdersServiceError>;

    /// Move an order to `status`.
    async fn update_status(
        &self,
        order: OrderId,
        status: OrderStatus,
    ) -> Result<StatusChange, OrdersServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        domain::{
            carts::{CartsService, options::OptionSelection},
            catalog::models::OptionsKind,
        },
        test::{
            TestContext,
            helpers::{count_orders, create_product},
        },
    };

    use super::*;

    #[tokio::test]
    async fn checkout_empty_cart_creates_no_order() -> TestResult {
        let ctx = TestContext::new().await;
        let session = SessionId::new();

        let result = ctx.orders.checkout(session).await;

        assert!(matches!(result, Err(OrdersServiceError::EmptyCart)));
        assert_eq!(count_orders(&ctx).await?, 0);

        // A cart that existed but was cleared is refused the same way.
        let product = create_product(&ctx, "Pizza A", 3500, OptionsKind::PizzaOpt, true).await?;
        ctx.carts
            .add_item(session, product, OptionSelection::default())
            .await?;
        ctx.carts.clear(session).await?;

        let result = ctx.orders.checkout(session).await;

        assert!(matches!(result, Err(OrdersServiceError::EmptyCart)));
        assert_eq!(count_orders(&ctx).await?, 0);

        Ok(())
    }

    #[tokio::test]
    async fn checkout_freezes_totals_and_items() -> TestResult {
        let ctx = TestContext::new().await;
        let session = SessionId::new();
        let product = create_product(&ctx, "Pizza A", 3500, OptionsKind::PizzaOpt, true).await?;

        ctx.carts
            .add_item(
                session,
                product,
                OptionSelection {
                    extra_cheese: true,
                    ..OptionSelection::default()
                },
            )
            .await?;

        let id = ctx.orders.checkout(session).await?;
        let order = ctx.orders.get_order(id).await?;

        assert_eq!(order.total_amount, 3990);
        assert_eq!(order.status, OrderStatus::Paid);
        assert_eq!(order.customer_name, DEFAULT_CUSTOMER_NAME);
        assert_eq!(order.items.len(), 1);

        let item = order.items.first().ok_or("order has no items")?;

        assert_eq!(item.product_name, "Pizza A");
        assert_eq!(item.options, "Extra Cheese");
        assert_eq!(item.price, 3800);
        assert_eq!(item.product_id, Some(product));

        assert!(ctx.carts.snapshot(session).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn checkout_writes_one_item_per_line() -> TestResult {
        let ctx = TestContext::new().await;
        let session = SessionId::new();
        let pizza = create_product(&ctx, "Margherita", 2600, OptionsKind::PizzaOpt, true).await?;
        let latte = create_product(&ctx, "Cafe Latte", 1000, OptionsKind::CoffeeOpt, true).await?;

        ctx.carts
            .add_item(session, pizza, OptionSelection::default())
            .await?;
        ctx.carts
            .add_item(session, latte, OptionSelection::default())
            .await?;
        ctx.carts
            .add_item(session, pizza, OptionSelection::default())
            .await?;

        let order = ctx.orders.get_order(ctx.orders.checkout(session).await?).await?;

        let names: Vec<&str> = order
            .items
            .iter()
            .map(|item| item.product_name.as_str())
            .collect();

        assert_eq!(names, ["Margherita", "Cafe Latte", "Margherita"]);
        assert_eq!(order.total_amount, 6510);

        Ok(())
    }

    #[tokio::test]
    async fn failed_checkout_rolls_back_and_keeps_cart() -> TestResult {
        let ctx = TestContext::new().await;
        let session = SessionId::new();
        let product = create_product(&ctx, "Margherita", 2600, OptionsKind::PizzaOpt, true).await?;

        ctx.carts
            .add_item(session, product, OptionSelection::default())
            .await?;

        // Order items can no longer be written, so the commit must fail midway.
        sqlx::query("ALTER TABLE order_items ADD CONSTRAINT reject_all CHECK (price < 0)")
            .execute(ctx.db.pool())
            .await?;

        let result = ctx.orders.checkout(session).await;

        assert!(result.is_err(), "checkout should fail, got {result:?}");
        assert_eq!(count_orders(&ctx).await?, 0);
        assert_eq!(ctx.carts.snapshot(session).await?.lines.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn complete_then_restore_ends_paid() -> TestResult {
        let ctx = TestContext::new().await;
        let session = SessionId::new();
        let product = create_product(&ctx, "Margherita", 2600, OptionsKind::PizzaOpt, true).await?;

        ctx.carts
            .add_item(session, product, OptionSelection::default())
            .await?;

        let id = ctx.orders.checkout(session).await?;

        let completed = ctx.orders.update_status(id, OrderStatus::Completed).await?;

        assert_eq!(completed.from, OrderStatus::Paid);
        assert_eq!(completed.to, OrderStatus::Completed);

        let restored = ctx.orders.update_status(id, OrderStatus::Paid).await?;

        assert_eq!(restored.from, OrderStatus::Completed);
        assert_eq!(ctx.orders.get_order(id).await?.status, OrderStatus::Paid);

        Ok(())
    }

    #[tokio::test]
    async fn repeated_status_is_a_noop() -> TestResult {
        let ctx = TestContext::new().await;
        let session = SessionId::new();
        let product = create_product(&ctx, "Margherita", 2600, OptionsKind::PizzaOpt, true).await?;

        ctx.carts
            .add_item(session, product, OptionSelection::default())
            .await?;

        let id = ctx.orders.checkout(session).await?;

        ctx.orders.update_status(id, OrderStatus::Completed).await?;
        let again = ctx.orders.update_status(id, OrderStatus::Completed).await?;

        assert!(again.is_noop());
        assert_eq!(ctx.orders.get_order(id).await?.status, OrderStatus::Completed);

        Ok(())
    }

    #[tokio::test]
    async fn update_status_unknown_order_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx
            .orders
            .update_status(OrderId::from_i64(424_242), OrderStatus::Completed)
            .await;

        assert!(
            matches!(result, Err(OrdersServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn get_order_unknown_id_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.orders.get_order(OrderId::from_i64(424_242)).await;

        assert!(matches!(result, Err(OrdersServiceError::NotFound)));
    }
}
