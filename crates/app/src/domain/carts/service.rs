//! Carts service.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::{SignedDuration, Timestamp};
use mockall::automock;
use tracing::debug;

use crate::domain::{
    carts::{
        errors::CartsServiceError,
        models::{CartLine, CartSnapshot, SessionId},
        options::{OptionSelection, addon_total},
        store::CartStore,
    },
    catalog::{CatalogService, models::ProductId},
    pricing::TaxRate,
};

/// Carts held in process memory, priced from the catalog at add time.
#[derive(Clone)]
pub struct InMemoryCartsService {
    store: Arc<CartStore>,
    catalog: Arc<dyn CatalogService>,
    tax_rate: TaxRate,
}

impl InMemoryCartsService {
    #[must_use]
    pub fn new(store: Arc<CartStore>, catalog: Arc<dyn CatalogService>, tax_rate: TaxRate) -> Self {
        Self {
            store,
            catalog,
            tax_rate,
        }
    }
}

#[async_trait]
impl CartsService for InMemoryCartsService {
    async fn add_item(
        &self,
        session: SessionId,
        product: ProductId,
        options: OptionSelection,
    ) -> Result<CartLine, CartsServiceError> {
        let product = self.catalog.get_product(product).await?;

        if !product.in_stock {
            return Err(CartsServiceError::SoldOut);
        }

        let keys = options.keys();

        if let Some(key) = keys.iter().find(|key| !key.offered_by(product.options_kind)) {
            return Err(CartsServiceError::OptionNotOffered(*key));
        }

        let line = CartLine {
            product_id: product.id,
            name: product.name,
            base_price: product.price,
            addon_total: addon_total(&keys),
            options: keys,
        };

        let cart = self.store.cart(session).await;
        let mut cart = cart.lock().await;

        cart.push(line.clone(), Timestamp::now());

        debug!(%session, product = %line.product_id, lines = cart.lines().len(), "cart line added");

        Ok(line)
    }

    async fn clear(&self, session: SessionId) -> Result<(), CartsServiceError> {
        if let Some(cart) = self.store.existing(session).await {
            cart.lock().await.clear(Timestamp::now());
        }

        Ok(())
    }

    async fn snapshot(&self, session: SessionId) -> Result<CartSnapshot, CartsServiceError> {
        let Some(cart) = self.store.existing(session).await else {
            return Ok(CartSnapshot::default());
        };

        let cart = cart.lock().await;

        Ok(cart.snapshot(self.tax_rate)?)
    }

    async fn prune_idle(&self, max_idle: SignedDuration) -> usize {
        self.store.prune_idle(Timestamp::now(), max_idle).await
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Append a line for `product` with the selected options to the session's cart.
    async fn add_item(
        &self,
        session: SessionId,
        product: ProductId,
        options: OptionSelection,
    ) -> Result<CartLine, CartsServiceError>;

    /// Empty the session's cart.
    async fn clear(&self, session: SessionId) -> Result<(), CartsServiceError>;

    /// Lines and totals of the session's cart.
    async fn snapshot(&self, session: SessionId) -> Result<CartSnapshot, CartsServiceError>;

    /// Forget carts idle for longer than `max_idle`, returning how many were dropped.
    async fn prune_idle(&self, max_idle: SignedDuration) -> usize;
}
