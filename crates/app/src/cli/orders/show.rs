use std::sync::Arc;

use clap::Args;
use ovenline_app::domain::{
    carts::store::CartStore,
    orders::{DEFAULT_CUSTOMER_NAME, OrdersService, PgOrdersService, models::OrderId},
    pricing::TaxRate,
};

#[derive(Debug, Args)]
pub(crate) struct ShowOrderArgs {
    /// Order id
    id: OrderId,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: ShowOrderArgs) -> Result<(), String> {
    let db = super::super::connect(&args.database_url).await?;

    let service = PgOrdersService::new(
        db,
        Arc::new(CartStore::new()),
        TaxRate::default(),
        DEFAULT_CUSTOMER_NAME.to_string(),
    );

    let order = service
        .get_order(args.id)
        .await
        .map_err(|error| format!("failed to load order {}: {error}", args.id))?;

    super::print_order(&order);

    Ok(())
}
