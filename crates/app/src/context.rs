//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    database::{self, Db},
    domain::{
        carts::{CartsService, InMemoryCartsService, store::CartStore},
        catalog::{CatalogService, PgCatalogService},
        kitchen::{KitchenService, PgKitchenService, policy::KitchenPolicy},
        orders::{DEFAULT_CUSTOMER_NAME, OrdersService, PgOrdersService},
        pricing::TaxRate,
    },
    images::{
        HttpImageGenerator, ImageGenerationError, ImageGenerator, ImageGeneratorConfig,
        UnconfiguredImageGenerator,
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migrations(#[source] sqlx::migrate::MigrateError),

    #[error("failed to build image generator")]
    Images(#[source] ImageGenerationError),
}

/// Settings the services are built from.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub run_migrations: bool,
    pub tax_rate: TaxRate,
    pub customer_name: String,
    pub kitchen: KitchenPolicy,
    pub images: Option<ImageGeneratorConfig>,
}

impl AppConfig {
    #[must_use]
    pub fn new(database_url: String) -> Self {
        Self {
            database_url,
            run_migrations: true,
            tax_rate: TaxRate::default(),
            customer_name: DEFAULT_CUSTOMER_NAME.to_string(),
            kitchen: KitchenPolicy::default(),
            images: None,
        }
    }
}

#[derive(Clone)]
pub struct AppContext {
    pub catalog: Arc<dyn CatalogService>,
    pub carts: Arc<dyn CartsService>,
    pub orders: Arc<dyn OrdersService>,
    pub kitchen: Arc<dyn KitchenService>,
    pub images: Arc<dyn ImageGenerator>,
    pub tax_rate: TaxRate,
}

impl AppContext {
    /// Build application context from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when connecting, migrating, or building a collaborator fails.
    pub async fn from_config(config: AppConfig) -> Result<Self, AppInitError> {
        let pool = database::connect(&config.database_url)
            .await
            .map_err(AppInitError::Database)?;

        if config.run_migrations {
            database::migrate(&pool)
                .await
                .map_err(AppInitError::Migrations)?;
        }

        let db = Db::new(pool);
        let store = Arc::new(CartStore::new());
        let catalog: Arc<dyn CatalogService> = Arc::new(PgCatalogService::new(db.clone()));

        let images: Arc<dyn ImageGenerator> = match config.images {
            Some(images) => {
                Arc::new(HttpImageGenerator::new(images).map_err(AppInitError::Images)?)
            }
            None => Arc::new(UnconfiguredImageGenerator),
        };

        Ok(Self {
            carts: Arc::new(InMemoryCartsService::new(
                Arc::clone(&store),
                Arc::clone(&catalog),
                config.tax_rate,
            )),
            orders: Arc::new(PgOrdersService::new(
                db.clone(),
                store,
                config.tax_rate,
                config.customer_name,
            )),
            kitchen: Arc::new(PgKitchenService::new(db, config.kitchen)),
            catalog,
            images,
            tax_rate: config.tax_rate,
        })
    }
}
