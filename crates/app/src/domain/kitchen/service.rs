//! Kitchen service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use sqlx::{Postgres, Transaction};

use crate::{
    database::Db,
    domain::{
        kitchen::{
            errors::KitchenServiceError, policy::KitchenPolicy, repository::PgKitchenRepository,
        },
        orders::{
            models::{Order, OrderId, attach_items},
            repository::PgOrdersRepository,
        },
    },
};

/// Both ticket lists of one kitchen display refresh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KitchenFeed {
    pub active: Vec<Order>,
    pub completed: Vec<Order>,
}

#[derive(Debug, Clone)]
pub struct PgKitchenService {
    db: Db,
    repository: PgKitchenRepository,
    orders_repository: PgOrdersRepository,
    policy: KitchenPolicy,
}

impl PgKitchenService {
    #[must_use]
    pub fn new(db: Db, policy: KitchenPolicy) -> Self {
        Self {
            db,
            repository: PgKitchenRepository::new(),
            orders_repository: PgOrdersRepository::new(),
            policy,
        }
    }

    async fn with_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        mut orders: Vec<Order>,
    ) -> Result<Vec<Order>, KitchenServiceError> {
        let ids: Vec<OrderId> = orders.iter().map(|order| order.id).collect();

        let items = self.orders_repository.list_order_items(tx, &ids).await?;

        attach_items(&mut orders, items);

        Ok(orders)
    }
}

#[async_trait]
impl KitchenService for PgKitchenService {
    async fn active_tickets(&self, now: Timestamp) -> Result<Vec<Order>, KitchenServiceError> {
        let since = self
            .policy
            .window_start(now)
            .map_err(KitchenServiceError::Window)?;

        let mut tx = self.db.begin().await?;

        let orders = self.repository.list_active_orders(&mut tx, since).await?;
        let orders = self.with_items(&mut tx, orders).await?;

        tx.commit().await?;

        Ok(orders)
    }

    async fn recently_completed(
        &self,
        now: Timestamp,
    ) -> Result<Vec<Order>, KitchenServiceError> {
        let since = self
            .policy
            .window_start(now)
            .map_err(KitchenServiceError::Window)?;

        let mut tx = self.db.begin().await?;

        let orders = self
            .repository
            .list_completed_orders(&mut tx, since, self.policy.completed_limit)
            .await?;
        let orders = self.with_items(&mut tx, orders).await?;

        tx.commit().await?;

        Ok(orders)
    }

    async fn feed(&self, now: Timestamp) -> Result<KitchenFeed, KitchenServiceError> {
        let since = self
            .policy
            .window_start(now)
            .map_err(KitchenServiceError::Window)?;

        let mut tx = self.db.begin().await?;

        let active = self.repository.list_active_orders(&mut tx, since).await?;
        let completed = self
            .repository
            .list_completed_orders(&mut tx, since, self.policy.completed_limit)
            .await?;

        let active = self.with_items(&mut tx, active).await?;
        let completed = self.with_items(&mut tx, completed).await?;

        tx.commit().await?;

        Ok(KitchenFeed { active, completed })
    }
}

#[automock]
#[async_trait]
pub trait KitchenService: Send + Sync {
    /// Orders awaiting preparation inside the window, ascending by id.
    async fn active_tickets(&self, now: Timestamp) -> Result<Vec<Order>, KitchenServiceError>;

    /// Most recently completed orders inside the window, descending by id and capped.
    async fn recently_completed(&self, now: Timestamp)
    -> Result<Vec<Order>, KitchenServiceError>;

    /// Active and recently completed tickets read together.
    async fn feed(&self, now: Timestamp) -> Result<KitchenFeed, KitchenServiceError>;
}
