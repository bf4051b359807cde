//! Test Helpers

use jiff::Timestamp;
use jiff_sqlx::Timestamp as SqlxTimestamp;

use crate::{
    domain::{
        catalog::models::{OptionsKind, ProductId},
        orders::{models::OrderId, status::OrderStatus},
    },
    test::TestContext,
};

/// Insert a product into the seeded `pizza` category.
pub(crate) async fn create_product(
    ctx: &TestContext,
    name: &str,
    price: i64,
    options_kind: OptionsKind,
    in_stock: bool,
) -> Result<ProductId, sqlx::Error> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO products (category, name, description, price, image_url, options_kind, in_stock)
         VALUES ('pizza', $1, '', $2, '', $3, $4)
         RETURNING id",
    )
    .bind(name)
    .bind(price)
    .bind(options_kind.as_str())
    .bind(in_stock)
    .fetch_one(ctx.db.pool())
    .await?;

    Ok(ProductId::from_i64(id))
}

pub(crate) async fn count_orders(ctx: &TestContext) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM orders")
        .fetch_one(ctx.db.pool())
        .await
}

/// Insert an order directly, bypassing checkout, so tests control its
/// status and creation time. Each name becomes one 1000-unit item.
pub(crate) async fn insert_order(
    ctx: &TestContext,
    status: OrderStatus,
    created_at: Timestamp,
    items: &[&str],
) -> Result<OrderId, sqlx::Error> {
    let mut tx = ctx.db.pool().begin().await?;

    let total = i64::try_from(items.len()).unwrap_or(i64::MAX) * 1000;

    let id: i64 = sqlx::query_scalar(
        "INSERT INTO orders (customer_name, total_amount, status, created_at)
         VALUES ('Guest Customer', $1, $2, $3)
         RETURNING id",
    )
    .bind(total)
    .bind(status.as_str())
    .bind(SqlxTimestamp::from(created_at))
    .fetch_one(&mut *tx)
    .await?;

    for name in items {
        sqlx::query(
            "INSERT INTO order_items (order_id, product_id, product_name, options, price)
             VALUES ($1, NULL, $2, '', 1000)",
        )
        .bind(id)
        .bind(name)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    Ok(OrderId::from_i64(id))
}
