//! Ovenline Web Server

use std::{process, sync::Arc};

use salvo::{affix_state::inject, prelude::*};
use tracing::{error, info};

use ovenline_app::context::{AppConfig, AppContext};

use crate::{
    config::ServerConfig,
    observability::init_logging,
    state::{ShopSettings, State},
    views::Views,
};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod carts;
mod config;
mod extensions;
mod healthcheck;
mod images;
mod kitchen;
mod observability;
mod orders;
mod router;
mod session;
mod shop;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;
mod views;

/// Ovenline web server entry point
#[tokio::main]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    if let Err(init_error) = init_logging(&config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialize, must use eprintln"
        )]
        {
            eprintln!("Logging error: {init_error}");
        }

        process::exit(1);
    }

    let app_config = AppConfig {
        run_migrations: !config.database.skip_migrations,
        tax_rate: config.shop.tax_rate,
        customer_name: config.shop.customer_name.clone(),
        kitchen: config.kitchen.policy(),
        images: config.images.generator_config(),
        ..AppConfig::new(config.database.database_url.clone())
    };

    let app = match AppContext::from_config(app_config).await {
        Ok(app) => app,
        Err(init_error) => {
            error!("failed to initialize app context: {init_error}");

            process::exit(1);
        }
    };

    let views = match Views::new() {
        Ok(views) => views,
        Err(template_error) => {
            error!("failed to parse templates: {template_error}");

            process::exit(1);
        }
    };

    let state = State::shared(
        app,
        views,
        ShopSettings {
            currency_symbol: config.shop.currency_symbol.clone(),
            poll_interval_secs: config.kitchen.kitchen_poll_interval_secs,
        },
    );

    let pruner = carts::pruning::spawn(Arc::clone(&state), config.shop.cart_idle);

    let addr = config.socket_addr();

    info!("Starting server on {addr}");

    // Bind server
    let listener = TcpListener::new(addr).bind().await;

    let router = Router::new()
        .hoop(inject(state))
        .push(router::app_router(config.images.image_dir.clone()));

    let server = Server::new(listener);

    let handle = server.handle();

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle, vec![pruner]).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    // Start serving requests
    server.serve(router).await;
}
