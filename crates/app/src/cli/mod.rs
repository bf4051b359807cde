use clap::{Parser, Subcommand};

mod db;
mod kitchen;
mod orders;

#[derive(Debug, Parser)]
#[command(name = "ovenline-app", about = "Ovenline CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Db(db::DbCommand),
    Kitchen(kitchen::KitchenCommand),
    Orders(orders::OrdersCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Db(command) => db::run(command).await,
            Commands::Kitchen(command) => kitchen::run(command).await,
            Commands::Orders(command) => orders::run(command).await,
        }
    }
}

/// Connect to the database named by `DATABASE_URL` or `--database-url`.
pub(crate) async fn connect(database_url: &str) -> Result<ovenline_app::database::Db, String> {
    let pool = ovenline_app::database::connect(database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    Ok(ovenline_app::database::Db::new(pool))
}
