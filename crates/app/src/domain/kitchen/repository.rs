//! Kitchen Repository

use jiff::Timestamp;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{Postgres, Transaction, query_as};

use crate::domain::orders::models::Order;

const LIST_ACTIVE_ORDERS_SQL: &str = include_str!("sql/list_active_orders.sql");
const LIST_COMPLETED_ORDERS_SQL: &str = include_str!("sql/list_completed_orders.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgKitchenRepository;

impl PgKitchenRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Orders not yet completed created at or after `since`, oldest id first.
    pub(crate) async fn list_active_orders(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        since: Timestamp,
    ) -> Result<Vec<Order>, sqlx::Error> {
        query_as::<Postgres, Order>(LIST_ACTIVE_ORDERS_SQL)
            .bind(SqlxTimestamp::from(since))
            .fetch_all(&mut **tx)
            .await
    }

    /// Completed orders created at or after `since`, newest id first.
    pub(crate) async fn list_completed_orders(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        since: Timestamp,
        limit: u32,
    ) -> Result<Vec<Order>, sqlx::Error> {
        query_as::<Postgres, Order>(LIST_COMPLETED_ORDERS_SQL)
            .bind(SqlxTimestamp::from(since))
            .bind(i64::from(limit))
            .fetch_all(&mut **tx)
            .await
    }
}
