use std::sync::Arc;

use clap::Args;
use ovenline_app::domain::{
    carts::store::CartStore,
    orders::{
        DEFAULT_CUSTOMER_NAME, OrdersService, PgOrdersService, models::OrderId,
        status::OrderStatus,
    },
    pricing::TaxRate,
};

#[derive(Debug, Args)]
pub(crate) struct SetStatusArgs {
    /// Order id
    id: OrderId,

    /// Target status: `Paid` or `Completed`
    status: OrderStatus,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: SetStatusArgs) -> Result<(), String> {
    let db = super::super::connect(&args.database_url).await?;

    let service = PgOrdersService::new(
        db,
        Arc::new(CartStore::new()),
        TaxRate::default(),
        DEFAULT_CUSTOMER_NAME.to_string(),
    );

    let change = service
        .update_status(args.id, args.status)
        .await
        .map_err(|error| format!("failed to update order {}: {error}", args.id))?;

    if change.is_noop() {
        println!("order {} already {}", args.id, change.to);
    } else {
        println!("order {}: {} -> {}", args.id, change.from, change.to);
    }

    Ok(())
}
