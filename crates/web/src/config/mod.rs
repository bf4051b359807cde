//! Server configuration module

use clap::Parser;

use crate::config::{
    db::DatabaseConfig, images::ImagesConfig, kitchen::KitchenConfig, logging::LoggingConfig,
    server::ServerRuntimeConfig, shop::ShopConfig,
};

pub(crate) mod db;
pub(crate) mod images;
pub(crate) mod kitchen;
pub(crate) mod logging;
pub(crate) mod server;
pub(crate) mod shop;

/// Ovenline web server configuration
#[derive(Debug, Parser)]
#[command(name = "ovenline-web", about = "Ovenline ordering and kitchen display server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Pricing and checkout settings.
    #[command(flatten)]
    pub shop: ShopConfig,

    /// Kitchen display settings.
    #[command(flatten)]
    pub kitchen: KitchenConfig,

    /// Image generation settings.
    #[command(flatten)]
    pub images: ImagesConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}
